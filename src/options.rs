//! Configuration options for value printing.
//!
//! [`PrintOptions`] controls the parts of the output that are a matter of
//! taste rather than correctness: how many elements of a long sequence are
//! shown, and how much type information is spelled out.
//!
//! ## Examples
//!
//! ```rust
//! use printto::{print_to_string, PrintOptions};
//!
//! let numbers: Vec<u32> = (1..=5).collect();
//!
//! let options = PrintOptions::new().with_max_elements(3);
//! assert_eq!(print_to_string!(numbers, options), "{ 1, 2, 3, ... }");
//!
//! assert_eq!(
//!     print_to_string!(numbers, PrintOptions::unlimited()),
//!     "{ 1, 2, 3, 4, 5 }"
//! );
//! ```

/// Number of elements printed from a sequence or map before it is elided.
pub const DEFAULT_MAX_ELEMENTS: usize = 32;

/// Configuration options for printing.
///
/// # Examples
///
/// ```rust
/// use printto::PrintOptions;
///
/// // Default: at most 32 elements per container, unqualified variants
/// let options = PrintOptions::new();
/// assert_eq!(options.max_elements, Some(32));
///
/// // Custom configuration
/// let options = PrintOptions::new()
///     .with_max_elements(8)
///     .with_qualified_variants(true)
///     .with_type_names(false);
/// assert!(options.qualify_variants);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    pub max_elements: Option<usize>,
    pub qualify_variants: bool,
    pub type_names: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            max_elements: Some(DEFAULT_MAX_ELEMENTS),
            qualify_variants: false,
            type_names: true,
        }
    }
}

impl PrintOptions {
    /// Creates default options (32-element limit, type names, bare variants).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use printto::PrintOptions;
    ///
    /// let options = PrintOptions::new();
    /// assert!(options.type_names);
    /// assert!(!options.qualify_variants);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that never elide container elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use printto::PrintOptions;
    ///
    /// assert_eq!(PrintOptions::unlimited().max_elements, None);
    /// ```
    #[must_use]
    pub fn unlimited() -> Self {
        PrintOptions {
            max_elements: None,
            ..Default::default()
        }
    }

    /// Sets how many elements of a sequence or map are printed before `...`.
    #[must_use]
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    /// Removes the element limit.
    #[must_use]
    pub fn without_element_limit(mut self) -> Self {
        self.max_elements = None;
        self
    }

    /// Prints enum variants as `Enum::Variant` instead of `Variant`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use printto::{print_to_string, PrintOptions};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// enum Color { Red }
    ///
    /// let options = PrintOptions::new().with_qualified_variants(true);
    /// assert_eq!(print_to_string!(Color::Red, options), "Color::Red");
    /// ```
    #[must_use]
    pub fn with_qualified_variants(mut self, qualify: bool) -> Self {
        self.qualify_variants = qualify;
        self
    }

    /// Controls whether struct, tuple-struct and newtype names are printed.
    ///
    /// Unit structs always print their name, since it is their only content.
    #[must_use]
    pub fn with_type_names(mut self, type_names: bool) -> Self {
        self.type_names = type_names;
        self
    }
}
