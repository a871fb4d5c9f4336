use serde::{Deserialize, Serialize};
use std::fmt;

/// Size tokens accepted by the image CDN
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_tokens() {
        assert_eq!(ImageSize::default(), ImageSize::W500);
        assert_eq!(ImageSize::W185.as_str(), "w185");
        assert_eq!(ImageSize::Original.to_string(), "original");
    }

    #[test]
    fn test_image_size_serde_matches_token() {
        let json = serde_json::to_string(&ImageSize::W780).unwrap();
        assert_eq!(json, "\"w780\"");
    }
}
