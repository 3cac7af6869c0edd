/// Implements a basic `Debug` trait for types using their type name.
///
/// This macro generates a `Debug` implementation that simply prints the type name,
/// useful for types where the internal structure doesn't need to be exposed
/// (type-erased maps, boxed callbacks).
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Declares a closed token enumeration.
///
/// Every generated enum is `Copy`, ordered by declaration, serializes with
/// `snake_case` names and exposes:
///
/// - `ALL`: every variant in declaration order
/// - `COUNT`: the number of variants
/// - `index()`: the position of the variant inside `ALL`
/// - `name()` / `Display`: the variant name as written
///
/// # Usage
///
/// ```ignore
/// token_enum! {
///     /// Component size presets.
///     #[derive(Default)]
///     pub enum SizeType {
///         Small,
///         #[default]
///         Medium,
///         Large,
///     }
/// }
/// ```
#[macro_export]
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Position of this variant inside [`Self::ALL`].
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// The variant name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
