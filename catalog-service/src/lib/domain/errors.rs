/// Classification of a domain failure, independent of transport.
///
/// Inbound adapters dispatch on this instead of inspecting error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a value outside its allowed range
    Validation,
    /// The addressed entity does not exist
    NotFound,
    /// The write would break a uniqueness or dependency rule
    Conflict,
    /// Bad credentials
    Auth,
    /// Store or primitive failure
    Internal,
}
