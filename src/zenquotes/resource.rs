use fake::Dummy;

/// Defines quotation data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}
