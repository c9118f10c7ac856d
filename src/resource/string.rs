use super::Resource;

/// Resource backed by an in-memory string
#[derive(Debug, Clone)]
pub struct StringResource {
    name: String,
    content: String,
}

impl StringResource {
    /// Create a new in-memory resource
    ///
    /// ## Arguments
    /// * 'name' - The diagnostic name reported as the resource path
    /// * 'content' - The EditorConfig text to serve
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> StringResource {
        StringResource {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl Resource for StringResource {
    fn path(&self) -> &str {
        &self.name
    }

    fn read(&self) -> std::io::Result<String> {
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_resource() {
        let resource = StringResource::new("a/b/.editorconfig", "root = true\n");

        assert_eq!(resource.path(), "a/b/.editorconfig");
        assert_eq!(resource.read().unwrap(), "root = true\n");
    }

    #[test]
    fn test_empty_content() {
        let resource = StringResource::new("empty", "");

        assert_eq!(resource.read().unwrap(), "");
    }

    #[test]
    fn test_repeated_reads_serve_same_content() {
        let resource = StringResource::new("x", "[*]\n");

        assert_eq!(resource.read().unwrap(), resource.read().unwrap());
    }
}
