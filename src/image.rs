//! Container image reference parsing

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image name cannot be empty")]
    Empty,
}

/// Parsed components of a container image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub registry: String,
    pub name: String,
    pub tag: String,
    /// Product name to look up in the lifecycle database (base of the path)
    pub product: String,
    /// Version extracted from the tag, empty for `latest`
    pub version: String,
}

impl ImageRef {
    /// Parses a reference like `registry.example.com/library/nginx:1.20-alpine`.
    ///
    /// The registry prefix is optional (Docker Hub assumed), the tag defaults
    /// to `latest`, and variant suffixes like `-alpine` or `-slim` are
    /// stripped from the version.
    pub fn parse(image: &str) -> Result<Self, ImageError> {
        if image.is_empty() {
            return Err(ImageError::Empty);
        }

        let parts: Vec<&str> = image.split('/').collect();
        let (registry, name_with_tag) =
            if parts.len() > 2 || (parts.len() == 2 && parts[0].contains('.')) {
                (parts[0].to_string(), parts[1..].join("/"))
            } else {
                (String::new(), image.to_string())
            };

        let (name, tag) = match name_with_tag.split_once(':') {
            Some((name, tag)) => (name.to_string(), tag.to_string()),
            None => (name_with_tag, "latest".to_string()),
        };

        let product = name.rsplit('/').next().unwrap_or(&name).to_string();

        let version = match tag.split_once('-') {
            Some((version, _suffix)) => version.to_string(),
            None => tag.clone(),
        };
        let version = if version == "latest" {
            String::new()
        } else {
            version
        };

        Ok(Self {
            registry,
            name,
            tag,
            product,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nginx:1.20", "", "nginx", "1.20", "nginx", "1.20")]
    #[case("nginx", "", "nginx", "latest", "nginx", "")]
    #[case("node:16-alpine", "", "node", "16-alpine", "node", "16")]
    #[case("python:3.11-slim", "", "python", "3.11-slim", "python", "3.11")]
    #[case("library/ubuntu:20.04", "", "library/ubuntu", "20.04", "ubuntu", "20.04")]
    #[case(
        "ghcr.io/acme/tools/node:18.19",
        "ghcr.io",
        "acme/tools/node",
        "18.19",
        "node",
        "18.19"
    )]
    #[case(
        "registry.example.com/nginx:1.20",
        "registry.example.com",
        "nginx",
        "1.20",
        "nginx",
        "1.20"
    )]
    fn parse_splits_reference_into_components(
        #[case] image: &str,
        #[case] registry: &str,
        #[case] name: &str,
        #[case] tag: &str,
        #[case] product: &str,
        #[case] version: &str,
    ) {
        let parsed = ImageRef::parse(image).unwrap();
        assert_eq!(parsed.registry, registry);
        assert_eq!(parsed.name, name);
        assert_eq!(parsed.tag, tag);
        assert_eq!(parsed.product, product);
        assert_eq!(parsed.version, version);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(ImageRef::parse(""), Err(ImageError::Empty)));
    }
}
