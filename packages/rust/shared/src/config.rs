//! Generator configuration for clientdocs.
//!
//! The tool is zero-configuration: every value here is a fixed constant, and
//! paths are relative to the working directory. The struct exists so the
//! pipeline receives its context explicitly instead of reading globals.

use std::path::{Path, PathBuf};

/// Where the external client generator writes its markdown reference.
const CLIENT_DOCS_DIR: &str = "api-client/docs";

/// Where the Jekyll subsite pages are written.
const JEKYLL_CLIENT_DIR: &str = "docs/api-client";

/// Append-mode run log.
const LOG_FILE: &str = "docs/client-docs.log";

/// URL segment of the subsite under `{{ site.baseurl }}`.
const SITE_SECTION: &str = "api-client";

/// Parent page title used for Jekyll navigation.
const SITE_TITLE: &str = "TypeScript API Client";

const PACKAGE_NAME: &str = "@metanull/inventory-app-api-client";
const REPOSITORY_URL: &str = "https://github.com/metanull/inventory-app/packages";
const GENERATE_COMMAND: &str = ". ./scripts/generate-api-client.ps1";
const PUBLISH_COMMAND: &str =
    ". ./scripts/publish-api-client.ps1 -Credential (Get-Credential -Message \"GitHub PAT\")";

/// Runtime context for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the generated client `*.md` files.
    pub source_dir: PathBuf,
    /// Destination directory for rendered pages and `index.md`.
    pub output_dir: PathBuf,
    /// Log file receiving a copy of every log line.
    pub log_file: PathBuf,
    /// Site-relative section the pages are served under.
    pub site_section: String,
    /// Title of the subsite's parent page.
    pub site_title: String,
    /// npm package the docs describe.
    pub package_name: String,
    /// Where the package is published.
    pub repository_url: String,
    /// Command that produces `source_dir`.
    pub generate_command: String,
    /// Command that publishes the package.
    pub publish_command: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(CLIENT_DOCS_DIR),
            output_dir: PathBuf::from(JEKYLL_CLIENT_DIR),
            log_file: PathBuf::from(LOG_FILE),
            site_section: SITE_SECTION.into(),
            site_title: SITE_TITLE.into(),
            package_name: PACKAGE_NAME.into(),
            repository_url: REPOSITORY_URL.into(),
            generate_command: GENERATE_COMMAND.into(),
            publish_command: PUBLISH_COMMAND.into(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with every path placed under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            source_dir: root.join(CLIENT_DOCS_DIR),
            output_dir: root.join(JEKYLL_CLIENT_DIR),
            log_file: root.join(LOG_FILE),
            ..Self::default()
        }
    }

    /// Site-relative link to the subsite index.
    pub fn index_url(&self) -> String {
        format!("{{{{ site.baseurl }}}}/{}/", self.site_section)
    }

    /// Site-relative link to a rendered page, given its normalized slug.
    pub fn page_url(&self, slug: &str) -> String {
        format!("{{{{ site.baseurl }}}}/{}/{slug}/", self.site_section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative() {
        let config = GeneratorConfig::default();
        assert_eq!(config.source_dir, PathBuf::from("api-client/docs"));
        assert_eq!(config.output_dir, PathBuf::from("docs/api-client"));
        assert_eq!(config.log_file, PathBuf::from("docs/client-docs.log"));
    }

    #[test]
    fn rooted_config_keeps_site_settings() {
        let config = GeneratorConfig::rooted_at(Path::new("/tmp/site"));
        assert_eq!(config.source_dir, PathBuf::from("/tmp/site/api-client/docs"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/site/docs/api-client"));
        assert_eq!(config.site_section, "api-client");
        assert_eq!(config.package_name, GeneratorConfig::default().package_name);
    }

    #[test]
    fn urls_are_site_relative() {
        let config = GeneratorConfig::default();
        assert_eq!(config.index_url(), "{{ site.baseurl }}/api-client/");
        assert_eq!(
            config.page_url("address-api"),
            "{{ site.baseurl }}/api-client/address-api/"
        );
    }
}
