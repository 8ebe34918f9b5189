//! Flat request parameters.
//!
//! Bot API requests travel as string-keyed form fields, not as one
//! nested JSON document. Scalars stringify through [`ToParam`]; nested
//! structures (keyboards, arrays of strings) are embedded as a single
//! JSON-encoded string value via [`Params::push_json`], which is how
//! the API expects `reply_markup` and friends.

use botwire_json::Encode;

/// An ordered list of request parameters.
///
/// Absent optionals are never pushed, so the wire form carries only the
/// fields the caller set, mirroring the JSON omission rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, String)>,
}

impl Params {
    /// An empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no parameters were pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one parameter.
    pub fn push(&mut self, name: &'static str, value: impl ToParam) {
        self.entries.push((name, value.to_param()));
    }

    /// Appends the parameter if the value is present.
    pub fn push_opt(&mut self, name: &'static str, value: &Option<impl ToParam>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Appends a nested structure as one JSON-encoded string value.
    pub fn push_json(&mut self, name: &'static str, value: &impl Encode) {
        self.entries.push((name, value.to_json()));
    }

    /// Appends the JSON-encoded structure if it is present.
    pub fn push_json_opt(&mut self, name: &'static str, value: &Option<impl Encode>) {
        if let Some(value) = value {
            self.push_json(name, value);
        }
    }

    /// Looks up the first parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates parameters in push order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Scalar conversion into a parameter value.
pub trait ToParam {
    /// The value as the string the wire expects.
    fn to_param(&self) -> String;
}

impl ToParam for str {
    fn to_param(&self) -> String {
        self.to_owned()
    }
}

impl ToParam for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ToParam for bool {
    fn to_param(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_to_param_int {
    ($($ty:ty),*) => {
        $(
            impl ToParam for $ty {
                fn to_param(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_param_int!(i32, i64, u32, u64);

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

/// A request record that flattens itself into [`Params`].
pub trait ToParams {
    /// The flattened parameter list, in declared field order.
    fn to_params(&self) -> Params;
}
