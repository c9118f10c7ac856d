//! The loading facade: composition of parser, model handler and error policy.

use crate::model::{EditorConfig, PropertyTypeRegistry, Version};
use crate::parser::{EditorConfigParser, ErrorHandler, ErrorPolicy, ModelHandler};
use crate::resource::Resource;
use crate::{Error, Result};

/// Loads [`EditorConfig`] models out of [`Resource`]s.
///
/// A loader composes the three collaborators of a parse - an [`EditorConfigParser`], a
/// [`ModelHandler`] bound to a [`Version`] and a [`PropertyTypeRegistry`], and an
/// [`ErrorHandler`] policy - and drives one parse per [`Self::load`] call. The composition is
/// fixed at construction: the same version, registry and policy apply to every load through
/// this loader, and no two loaders ever share a parser or handler.
///
/// # Construction
///
/// [`EditorConfigLoader::default`] gives the standard setup (current format revision, standard
/// property set, abort on syntax errors and tolerate invalid values). Anything else goes
/// through [`EditorConfigLoader::builder`], where each field defaults independently, or through
/// [`EditorConfigLoader::new`] for callers that build their own [`ModelHandler`].
///
/// # Reuse and concurrency
///
/// `load` takes `&mut self` because it mutates the owned handler, so one loader cannot run two
/// loads concurrently - the borrow checker rules it out. Sequential reuse is fully supported:
/// the handler resets itself at the start of every cycle, and each call returns an independent
/// model. Callers that want a loader per in-flight load simply build one per call.
///
/// # Examples
///
/// ```rust
/// use edconf::{EditorConfigLoader, StringResource};
///
/// let mut loader = EditorConfigLoader::default();
/// let resource = StringResource::new(
///     ".editorconfig",
///     "root = true\n\n[*.rs]\nindent_style = space\nindent_size = 4\n",
/// );
///
/// let config = loader.load(&resource)?;
/// assert!(config.is_root());
/// assert_eq!(config.sections().len(), 1);
/// # Ok::<(), edconf::Error>(())
/// ```
pub struct EditorConfigLoader {
    parser: EditorConfigParser,
    handler: ModelHandler,
    error_handler: Box<dyn ErrorHandler>,
}

impl std::fmt::Debug for EditorConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorConfigLoader")
            .field("parser", &self.parser)
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}

impl EditorConfigLoader {
    /// Create a loader around an already-built handler and error policy.
    ///
    /// This is the primary construction form; the loader builds its own default-configured
    /// [`EditorConfigParser`]. The builder paths all funnel into it.
    ///
    /// ## Arguments
    /// * 'handler' - Model handler, bound to the version and registry of the caller's choice
    /// * 'error_handler' - Policy consulted for every malformed construct
    pub fn new(handler: ModelHandler, error_handler: Box<dyn ErrorHandler>) -> EditorConfigLoader {
        EditorConfigLoader {
            parser: EditorConfigParser::new(),
            handler,
            error_handler,
        }
    }

    /// Start building a loader; every field defaults independently.
    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::new()
    }

    /// Load an [`EditorConfig`] model out of the given resource.
    ///
    /// Drives one parse over `resource` with this loader's handler and error policy, then
    /// retrieves the finished model. On success the model is always fully built; a failed load
    /// never exposes a partial one.
    ///
    /// # Errors
    ///
    /// - An I/O failure while reading the resource is returned as
    ///   [`Error::Resource`], its message naming the resource path and the original failure
    ///   preserved as the cause.
    /// - A malformed construct escalated by the error policy is returned unchanged, most
    ///   commonly as [`Error::Parse`]; no path context is attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edconf::{EditorConfigLoader, FileResource, Error};
    ///
    /// let mut loader = EditorConfigLoader::default();
    /// match loader.load(&FileResource::new("/no/such/dir/.editorconfig")) {
    ///     Err(Error::Resource { path, .. }) => assert!(path.contains(".editorconfig")),
    ///     other => panic!("expected a resource error, got {other:?}"),
    /// }
    /// ```
    pub fn load<R>(&mut self, resource: &R) -> Result<EditorConfig>
    where
        R: Resource + ?Sized,
    {
        tracing::debug!(path = resource.path(), "loading editorconfig");

        match self
            .parser
            .parse(resource, &mut self.handler, self.error_handler.as_ref())
        {
            Ok(()) => Ok(self.handler.editor_config()),
            Err(Error::Io(source)) => Err(Error::Resource {
                path: resource.path().to_string(),
                source,
            }),
            Err(other) => Err(other),
        }
    }

    /// The format revision every model produced by this loader is stamped with
    pub fn version(&self) -> Version {
        self.handler.version()
    }
}

impl Default for EditorConfigLoader {
    /// The standard setup: [`Version::CURRENT`], [`PropertyTypeRegistry::defaults`], and the
    /// abort-on-syntax-errors policy.
    fn default() -> EditorConfigLoader {
        EditorConfigLoader::builder().build()
    }
}

/// Builder for [`EditorConfigLoader`] with independently defaulting fields.
///
/// | field           | default                                    |
/// |-----------------|--------------------------------------------|
/// | `version`       | [`Version::CURRENT`]                       |
/// | `registry`      | [`PropertyTypeRegistry::defaults`]         |
/// | `error_handler` | [`ErrorPolicy::ThrowSyntaxIgnoreOthers`]   |
///
/// # Examples
///
/// ```rust
/// use edconf::{EditorConfigLoader, ErrorPolicy, PropertyTypeRegistry, Version};
///
/// let loader = EditorConfigLoader::builder()
///     .version("0.12.0".parse::<Version>()?)
///     .registry(PropertyTypeRegistry::defaults())
///     .error_handler(ErrorPolicy::IgnoreAll)
///     .build();
/// assert_eq!(loader.version(), Version::new(0, 12, 0));
/// # Ok::<(), edconf::Error>(())
/// ```
pub struct LoaderBuilder {
    version: Version,
    registry: PropertyTypeRegistry,
    error_handler: Box<dyn ErrorHandler>,
}

impl LoaderBuilder {
    fn new() -> LoaderBuilder {
        LoaderBuilder {
            version: Version::CURRENT,
            registry: PropertyTypeRegistry::defaults(),
            error_handler: Box::new(ErrorPolicy::default()),
        }
    }

    /// Target format revision (default: [`Version::CURRENT`])
    #[must_use]
    pub fn version(mut self, version: Version) -> LoaderBuilder {
        self.version = version;
        self
    }

    /// Typed-property registry (default: [`PropertyTypeRegistry::defaults`])
    #[must_use]
    pub fn registry(mut self, registry: PropertyTypeRegistry) -> LoaderBuilder {
        self.registry = registry;
        self
    }

    /// Error-handling policy (default: [`ErrorPolicy::ThrowSyntaxIgnoreOthers`])
    #[must_use]
    pub fn error_handler(mut self, error_handler: impl ErrorHandler + 'static) -> LoaderBuilder {
        self.error_handler = Box::new(error_handler);
        self
    }

    /// Assemble the loader: a fresh default parser and a fresh handler bound to the chosen
    /// version and registry.
    pub fn build(self) -> EditorConfigLoader {
        EditorConfigLoader::new(
            ModelHandler::new(self.registry, self.version),
            self.error_handler,
        )
    }
}

impl Default for LoaderBuilder {
    fn default() -> LoaderBuilder {
        LoaderBuilder::new()
    }
}

impl std::fmt::Debug for LoaderBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderBuilder")
            .field("version", &self.version)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
