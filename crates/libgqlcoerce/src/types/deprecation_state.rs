#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}
impl<'a> std::convert::From<Option<&'a str>> for DeprecationState<'a> {
    fn from(value: Option<&'a str>) -> DeprecationState<'a> {
        match value {
            Some(reason) => DeprecationState::Deprecated(reason),
            None => DeprecationState::NotDeprecated,
        }
    }
}
