use movie_catalog_config::{ImageConfig, DEFAULT_IMAGE_BASE_URL};
use movie_catalog_models::{ImageSize, Movie};

/// Resolves relative image paths against the image CDN
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
    default_size: ImageSize,
}

impl ImageUrlBuilder {
    /// A missing trailing `/` is added so size tokens join as `<base>/w500`
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            default_size: ImageSize::default(),
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self {
            default_size: config.default_size,
            ..Self::new(config.base_url.clone())
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base><size><path>`, or an empty string when there is no path.
    ///
    /// Callers show a placeholder for the empty string.
    pub fn get_image_url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}{}{}", self.base_url, size.as_str(), path),
            None => String::new(),
        }
    }

    pub fn default_image_url(&self, path: Option<&str>) -> String {
        self.get_image_url(path, self.default_size)
    }

    /// Card image for a movie: poster first, backdrop otherwise
    pub fn card_image_url(&self, movie: &Movie, size: ImageSize) -> String {
        self.get_image_url(movie.display_image_path(), size)
    }

    pub fn backdrop_url(&self, movie: &Movie, size: ImageSize) -> String {
        self.get_image_url(movie.backdrop_path.as_deref(), size)
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_yields_empty_url() {
        let images = ImageUrlBuilder::default();
        assert_eq!(images.get_image_url(None, ImageSize::W500), "");
        assert_eq!(images.get_image_url(Some(""), ImageSize::W500), "");
    }

    #[test]
    fn test_url_is_base_size_path() {
        let images = ImageUrlBuilder::default();
        assert_eq!(
            images.get_image_url(Some("/abc.jpg"), ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            images.get_image_url(Some("/abc.jpg"), ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn test_card_image_prefers_poster() {
        let images = ImageUrlBuilder::new("https://cdn.test/");
        let mut movie = Movie::new(1, "Backdrop Only");
        movie.backdrop_path = Some("/b.jpg".to_string());
        assert_eq!(images.card_image_url(&movie, ImageSize::W185), "https://cdn.test/w185/b.jpg");

        let movie = movie.with_poster_path("/p.jpg");
        assert_eq!(images.card_image_url(&movie, ImageSize::W185), "https://cdn.test/w185/p.jpg");
        assert_eq!(images.backdrop_url(&movie, ImageSize::W780), "https://cdn.test/w780/b.jpg");
    }

    #[test]
    fn test_default_size_from_config() {
        let config = ImageConfig {
            base_url: "https://cdn.test/".to_string(),
            default_size: ImageSize::W342,
        };
        let images = ImageUrlBuilder::from_config(&config);
        assert_eq!(images.default_image_url(Some("/x.jpg")), "https://cdn.test/w342/x.jpg");
    }

    #[test]
    fn test_base_without_trailing_slash_is_normalized() {
        let images = ImageUrlBuilder::new("https://cdn");
        assert_eq!(images.base_url(), "https://cdn/");
        assert_eq!(images.get_image_url(Some("/abc.jpg"), ImageSize::W500), "https://cdn/w500/abc.jpg");
    }
}
