use std::sync::Arc;

use tuio_shared::{
    Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, Object25D, Object2D, Object3D,
    Profile, ProfileHandler, ProfileKind,
};

mod sealed {
    pub trait Sealed {}
}

/// A profile type a [`Listener`](crate::Listener) can track.
///
/// Implemented for exactly the nine TUIO 1.1 profile types, each of which
/// owns one field of the listener's handler table. The trait is sealed.
pub trait ListenerProfile: Profile + sealed::Sealed {
    #[doc(hidden)]
    fn handler(handlers: &ProfileHandlers) -> Option<&Arc<ProfileHandler<Self>>>;
    #[doc(hidden)]
    fn handler_mut(handlers: &mut ProfileHandlers) -> &mut Option<Arc<ProfileHandler<Self>>>;
}

macro_rules! listener_profiles {
    ($($profile:ident => $field:ident),* $(,)?) => {
        /// One lazily created engine per profile kind
        #[derive(Default)]
        pub struct ProfileHandlers {
            $($field: Option<Arc<ProfileHandler<$profile>>>,)*
        }

        impl ProfileHandlers {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn tracked_kinds(&self) -> Vec<ProfileKind> {
                let mut kinds = Vec::new();
                $(
                    if self.$field.is_some() {
                        kinds.push(<$profile as Profile>::KIND);
                    }
                )*
                kinds
            }

            pub fn clear_callbacks(&self) {
                $(
                    if let Some(handler) = &self.$field {
                        handler.clear_callbacks();
                    }
                )*
            }
        }

        $(
            impl sealed::Sealed for $profile {}

            impl ListenerProfile for $profile {
                fn handler(handlers: &ProfileHandlers) -> Option<&Arc<ProfileHandler<Self>>> {
                    handlers.$field.as_ref()
                }

                fn handler_mut(
                    handlers: &mut ProfileHandlers,
                ) -> &mut Option<Arc<ProfileHandler<Self>>> {
                    &mut handlers.$field
                }
            }
        )*
    };
}

listener_profiles!(
    Cursor2D => cursor_2d,
    Cursor25D => cursor_25d,
    Cursor3D => cursor_3d,
    Object2D => object_2d,
    Object25D => object_25d,
    Object3D => object_3d,
    Blob2D => blob_2d,
    Blob25D => blob_25d,
    Blob3D => blob_3d,
);
