use rsip::Method;

/// The closed set of methods that establish a dialog.
///
/// INVITE per RFC 3261, REFER per RFC 3515, SUBSCRIBE per RFC 6665.
/// The set is immutable at runtime: no registration, no configuration.
static DIALOG_CREATING_METHODS: [Method; 3] =
    [Method::Invite, Method::Refer, Method::Subscribe];

/// The dialog-creating methods as a shared read-only table.
pub fn dialog_creating_methods() -> &'static [Method] {
    &DIALOG_CREATING_METHODS
}

/// Returns whether `method` establishes a dialog.
///
/// Unknown or extension methods simply do not create a dialog; there
/// is no error condition.
pub fn is_dialog_creating(method: &Method) -> bool {
    DIALOG_CREATING_METHODS.contains(method)
}
