use fake::Dummy;

/// Defines photo descriptor data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Photo {
    pub full_url: String,
}
