pub mod link;
pub mod profile;
mod util;

pub use self::{
    link::{
        IconType,
        Link,
        LinkId,
    },
    profile::Profile,
};

/// Path prefix under which the API lives, relative to the base URL.
pub const API_PREFIX: &str = "api";

/// Path of the profile endpoint, relative to [`API_PREFIX`].
pub const PROFILE_PATH: &str = "profile";

/// Path of the links endpoint, relative to [`API_PREFIX`].
pub const LINKS_PATH: &str = "links";
