//! Tree construction
//!
//! - [`child`]: the mixed string/node argument type used by every builder
//! - [`html`]: per-tag constructors and composite helpers
//! - [`description`]: builds trees from JSON or YAML document descriptions

pub mod child;
pub mod description;
pub mod html;

pub use child::Child;
pub use description::{from_value, load_str, DescriptionFormat};

/// Build a `Vec<Child>` from a mixed list of strings and nodes.
///
/// ```ignore
/// let d = div(children!["intro", br(), "more"]);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<$crate::building::Child>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::building::Child::from($child)),+]
    };
}
