//! Macros for declaring closed sets of actions.

/// Generate an action enum together with its `Action` implementation.
///
/// Variants may be unit or tuple variants. The kind of a variant defaults
/// to its name; `as "Some Kind"` overrides it.
///
/// # Example
///
/// ```
/// use actionlog::action_enum;
/// use actionlog::core::Action;
///
/// action_enum! {
///     pub enum PlayerAction {
///         Play,
///         Seek(u64) as "Seek To",
///         Volume(u8, bool),
///     }
/// }
///
/// assert_eq!(PlayerAction::Play.kind(), "Play");
/// assert_eq!(PlayerAction::Seek(30).kind(), "Seek To");
/// assert_eq!(PlayerAction::kinds(), &["Play", "Seek To", "Volume"]);
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(( $($field:ty),* $(,)? ))? $(as $kind:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(( $($field),* ))?
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => $crate::__action_kind!($variant $(, $kind)?)),*
                }
            }

            fn kinds() -> &'static [&'static str] {
                &[$($crate::__action_kind!($variant $(, $kind)?)),*]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __action_kind {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $kind:literal) => {
        $kind
    };
}
