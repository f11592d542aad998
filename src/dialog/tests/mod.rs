mod test_target;
