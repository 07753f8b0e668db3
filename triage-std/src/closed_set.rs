//! Closed variant sets with compile-time dispatch.
//!
//! A closed set is an enum whose variants each wrap one record struct.
//! Matching over it is exhaustive, so the compiler proves every variant is
//! handled and no runtime type inspection is needed.

/// Declare a closed set over record structs and delegate one capability.
///
/// The generated enum implements `Record`, gains a `kind()` accessor naming
/// the active variant, and converts `From` each wrapped struct. The
/// capability after the colon (`Behavior` or `Transfer`) is delegated to the
/// wrapped value with an exhaustive `match`.
///
/// # Example
/// ```ignore
/// closed_set! {
///     /// Anything we can rank.
///     #[derive(Clone, Debug)]
///     pub enum Ranked: Behavior {
///         Direct(DirectMessage),
///         Alert(SystemAlert),
///     }
/// }
/// ```
#[macro_export]
macro_rules! closed_set {
    (@enum
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty)
            ),+
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($inner),
            )+
        }

        impl $name {
            /// The name of the active variant.
            pub const fn kind(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant(_) => ::core::stringify!($variant),
                    )+
                }
            }
        }

        impl $crate::triage_core::Record for $name {}

        // From impls for each wrapped record
        $(
            impl ::core::convert::From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: Behavior {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty)
            ),+ $(,)?
        }
    ) => {
        $crate::closed_set!(@enum
            $(#[$meta])*
            $vis $name {
                $(
                    $(#[$vmeta])*
                    $variant($inner)
                ),+
            }
        );

        impl $crate::triage_core::Identify for $name {
            fn identity(&self) -> &str {
                match self {
                    $(
                        Self::$variant(inner) => $crate::triage_core::Identify::identity(inner),
                    )+
                }
            }
        }

        impl $crate::triage_core::Score for $name {
            fn score(&self) -> u32 {
                match self {
                    $(
                        Self::$variant(inner) => $crate::triage_core::Score::score(inner),
                    )+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: Transfer {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty)
            ),+ $(,)?
        }
    ) => {
        $crate::closed_set!(@enum
            $(#[$meta])*
            $vis $name {
                $(
                    $(#[$vmeta])*
                    $variant($inner)
                ),+
            }
        );

        impl $crate::triage_core::Transfer for $name {
            fn transfer_decision(
                &self,
                policy: &$crate::triage_core::TransferPolicy,
                destination: &str,
            ) -> $crate::triage_core::Decision {
                match self {
                    $(
                        Self::$variant(inner) => {
                            $crate::triage_core::Transfer::transfer_decision(inner, policy, destination)
                        }
                    )+
                }
            }
        }
    };
}
