use biolink_api_client::Snapshot;

/// Placeholder shown if the avatar fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150/1a1a1a/ffffff?text=F";

/// What the bio page is showing.
///
/// Starts out as [`ViewState::Loading`] and settles exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    NotFound,
    Populated(Snapshot),
}

impl ViewState {
    /// Settles the state with the outcome of the load.
    ///
    /// Any error counts as "no profile". Once settled, further calls are
    /// ignored.
    pub fn settle<E>(&mut self, result: Result<Snapshot, E>) {
        if self.is_settled() {
            tracing::warn!("view state already settled");
            return;
        }

        *self = match result {
            Ok(snapshot) => ViewState::Populated(snapshot),
            Err(_) => ViewState::NotFound,
        };
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            ViewState::Populated(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Load state of the avatar image.
///
/// Independent of [`ViewState`]. Once loaded, it stays loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvatarImage {
    loaded: bool,
    substituted: bool,
}

impl AvatarImage {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[cfg(test)]
    pub fn is_substituted(&self) -> bool {
        self.substituted
    }

    pub fn on_load(&mut self) {
        self.loaded = true;
    }

    /// The image failed to load. Switches to the placeholder.
    ///
    /// If the placeholder fails too, we keep it anyway.
    pub fn on_error(&mut self) {
        self.substituted = true;
        self.loaded = true;
    }

    /// The URL the `<img>` should point to.
    pub fn src<'a>(&self, profile_image: &'a str) -> &'a str {
        if self.substituted {
            PLACEHOLDER_IMAGE
        }
        else {
            profile_image
        }
    }
}
