use crate::merge;
use crate::value::Values;
use crate::Value;

/// The key under which [`ReplaceEmpty`] is stored in a configuration layer.
const REPLACE_EMPTY: &str = "replace_empty";

/// The template configuration.
///
/// Use [`Options::default()`] to get the default configuration and
/// [`Options::builder()`] to override parts of it.
///
/// Every configuration is built by deep merging one or more partial layers
/// over the default layer using [`merge`][crate::merge::merge]. A layer is a
/// [`Values`] record, for example the default layer is:
///
/// ```text
/// { replace_empty: false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub(crate) replace_empty: ReplaceEmpty,
}

/// What to substitute for a placeholder that has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReplaceEmpty {
    /// Leave the placeholder, brackets included, in the output.
    #[default]
    Keep,
    /// Substitute the given string, which may be empty.
    With(String),
}

/// A builder for the template configuration.
///
/// Fields that are not set fall back to the defaults when the options are
/// built. This struct is typically created using [`Options::builder()`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    replace_empty: Option<ReplaceEmpty>,
}

impl Options {
    /// Create a new options builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::{Options, ReplaceEmpty};
    ///
    /// let options = Options::builder().replace_empty("N/A").build();
    /// assert_eq!(options.replace_empty(), &ReplaceEmpty::With("N/A".into()));
    /// ```
    #[inline]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Build options from partial configuration layers.
    ///
    /// The layers are merged over the default layer in order, so later layers
    /// take precedence. Unrecognized keys are ignored and a `replace_empty`
    /// that is neither a string nor `false` resolves to
    /// [`ReplaceEmpty::Keep`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::{values, Options, ReplaceEmpty};
    ///
    /// let user = values! { replace_empty: "?" };
    /// let project = values! { replace_empty: None };
    ///
    /// let options = Options::from_layers([&user, &project]);
    /// assert_eq!(options.replace_empty(), &ReplaceEmpty::With("?".into()));
    /// ```
    pub fn from_layers<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a Values>,
    {
        let mut merged = Self::default().to_layer();
        for layer in layers {
            merge::merge_into(&mut merged, layer);
        }
        Self::from_layer(&merged)
    }

    /// Build options from any serializable partial configuration.
    ///
    /// The configuration must serialize to a map (or to nothing at all, which
    /// is the same as an empty map). Fields that serialize to `None` are left
    /// at their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::{Options, ReplaceEmpty};
    ///
    /// #[derive(serde::Serialize)]
    /// struct Config {
    ///     replace_empty: Option<String>,
    /// }
    ///
    /// let options = Options::from_serde(Config { replace_empty: None })?;
    /// assert_eq!(options, Options::default());
    ///
    /// let options = Options::from_serde(Config { replace_empty: Some("".into()) })?;
    /// assert_eq!(options.replace_empty(), &ReplaceEmpty::With("".into()));
    /// # Ok::<(), fillin::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_serde<S>(config: S) -> crate::Result<Self>
    where
        S: serde::Serialize,
    {
        let layer = crate::value::to_values(config)?;
        Ok(Self::from_layers([&layer]))
    }

    /// Returns the policy for placeholders without a value.
    #[inline]
    pub fn replace_empty(&self) -> &ReplaceEmpty {
        &self.replace_empty
    }

    /// Returns this configuration as a layer.
    pub fn to_layer(&self) -> Values {
        let replace_empty = match &self.replace_empty {
            ReplaceEmpty::Keep => Value::Bool(false),
            ReplaceEmpty::With(s) => Value::String(s.clone()),
        };
        Values::from([(REPLACE_EMPTY.to_owned(), replace_empty)])
    }

    fn from_layer(layer: &Values) -> Self {
        let replace_empty = match layer.get(REPLACE_EMPTY) {
            Some(Value::String(s)) => ReplaceEmpty::With(s.clone()),
            _ => ReplaceEmpty::Keep,
        };
        Self { replace_empty }
    }
}

impl OptionsBuilder {
    /// Creates a new options builder with nothing set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute the given string for placeholders that have no value.
    ///
    /// Pass `""` to remove such placeholders from the output.
    #[inline]
    pub fn replace_empty(&mut self, replacement: impl Into<String>) -> &mut Self {
        self.replace_empty = Some(ReplaceEmpty::With(replacement.into()));
        self
    }

    /// Leave placeholders that have no value in the output. This is the
    /// default.
    #[inline]
    pub fn keep_empty(&mut self) -> &mut Self {
        self.replace_empty = Some(ReplaceEmpty::Keep);
        self
    }

    /// Returns the fields set on this builder as a layer.
    ///
    /// Unset fields are [`Value::None`] so that they are skipped when merged.
    pub fn to_layer(&self) -> Values {
        let replace_empty = match &self.replace_empty {
            None => Value::None,
            Some(ReplaceEmpty::Keep) => Value::Bool(false),
            Some(ReplaceEmpty::With(s)) => Value::String(s.clone()),
        };
        Values::from([(REPLACE_EMPTY.to_owned(), replace_empty)])
    }

    /// Builds the configuration by merging the fields set on this builder
    /// over the defaults.
    pub fn build(&self) -> Options {
        Options::from_layers([&self.to_layer()])
    }
}

impl From<&mut OptionsBuilder> for Options {
    fn from(builder: &mut OptionsBuilder) -> Self {
        builder.build()
    }
}

impl From<OptionsBuilder> for Options {
    fn from(builder: OptionsBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn options_default() {
        assert_eq!(Options::default().replace_empty(), &ReplaceEmpty::Keep);
        assert_eq!(Options::builder().build(), Options::default());
        assert_eq!(
            Options::default().to_layer(),
            values! { replace_empty: false }
        );
    }

    #[test]
    fn options_builder_last_call_wins() {
        let options = Options::builder()
            .replace_empty("N/A")
            .keep_empty()
            .replace_empty("")
            .build();
        assert_eq!(options.replace_empty(), &ReplaceEmpty::With(String::new()));
    }

    #[test]
    fn options_builder_layer_skips_unset() {
        assert_eq!(
            OptionsBuilder::new().to_layer(),
            values! { replace_empty: None }
        );
    }

    #[test]
    fn options_from_layers() {
        let a = values! { replace_empty: "a" };
        let b = values! { replace_empty: false };
        let c = values! { unknown: 1 };
        assert_eq!(
            Options::from_layers([&a]).replace_empty(),
            &ReplaceEmpty::With("a".into())
        );
        assert_eq!(Options::from_layers([&a, &b]), Options::default());
        assert_eq!(
            Options::from_layers([&a, &c]).replace_empty(),
            &ReplaceEmpty::With("a".into())
        );
    }

    #[test]
    fn options_from_layers_unrecognized_shape() {
        let a = values! { replace_empty: 42 };
        assert_eq!(Options::from_layers([&a]), Options::default());
    }
}
