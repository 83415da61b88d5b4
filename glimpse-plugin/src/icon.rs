use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Type of the icon.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
pub enum IconType {
    /// [`Icon::data`] is a path to icon.
    Path,
    /// [`Icon::data`] is a freedesktop icon-theme name
    /// resolved by the host through an icon lookup.
    #[default]
    Named,
    /// [`Icon::data`] is an SVG string.
    Svg,
    /// [`Icon::data`] is a url to an icon.
    Url,
}

/// An icon representation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Icon {
    /// String content representing the icon data.
    ///
    /// See [`IconType`] for the meaning of the data.
    pub data: String,
    /// The type of the icon, indicating how the `data` field should be interpreted.
    pub r#type: IconType,
}

impl Icon {
    /// Creates a new icon with the given data and type.
    #[inline]
    pub fn new(data: impl Into<String>, r#type: IconType) -> Self {
        Self {
            data: data.into(),
            r#type,
        }
    }

    /// Creates a new icon with the given data and type set to [`IconType::Path`].
    #[inline]
    pub fn path(data: impl Into<String>) -> Self {
        Self::new(data, IconType::Path)
    }

    /// Creates a new icon with the given data and type set to [`IconType::Named`].
    #[inline]
    pub fn named(data: impl Into<String>) -> Self {
        Self::new(data, IconType::Named)
    }

    /// Creates a new icon with the given data and type set to [`IconType::Url`].
    #[inline]
    pub fn url(data: impl Into<String>) -> Self {
        Self::new(data, IconType::Url)
    }
}

#[derive(EnumString, AsRefStr, Debug, Clone, Copy)]
pub enum BuiltinIcon {
    Folder,
    Url,
    Video,
    Code,
    Error,
}

impl BuiltinIcon {
    /// Returns the icon corresponding to the given builtin icon type.
    pub fn icon(&self) -> Icon {
        match self {
            Self::Folder => Icon::named("folder"),
            Self::Url => Icon::named("applications-internet"),
            Self::Video => Icon::named("video-x-generic"),
            Self::Code => Icon::named("text-x-script"),
            Self::Error => Icon::named("dialog-error"),
        }
    }
}

impl From<BuiltinIcon> for Icon {
    fn from(value: BuiltinIcon) -> Self {
        value.icon()
    }
}
