//! Subsite `index.md`: package boilerplate plus one section per category.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::{debug, info, instrument};

use clientdocs_markdown::FrontMatter;
use clientdocs_shared::{ClientDocsError, GeneratorConfig, Result};

use crate::catalog::CategoryIndex;

/// File name of the aggregate index inside the output directory.
pub const INDEX_FILE: &str = "index.md";

/// Render the index document.
///
/// Categories with no entries get no section. Links use the same slug as the
/// page filenames.
pub fn render_index(
    index: &CategoryIndex,
    config: &GeneratorConfig,
    generated_at: &DateTime<Local>,
) -> String {
    let front_matter = FrontMatter::new()
        .raw("layout", "default")
        .raw("title", &config.site_title)
        .raw("nav_order", 4)
        .raw("has_children", true)
        .render();

    let mut md = front_matter;
    md.push('\n');
    md.push_str(&intro(config));

    md.push_str("## Documentation Categories\n\n");
    for (category, entries) in index.iter() {
        md.push_str(&format!("### {category} ({} items)\n\n", entries.len()));
        for entry in entries {
            md.push_str(&format!(
                "- [{}]({})\n",
                entry.title,
                config.page_url(&entry.slug())
            ));
        }
        md.push('\n');
    }

    md.push_str(&package_info(config, generated_at));
    md
}

/// Write `index.md` into the output directory, replacing any previous one.
#[instrument(skip_all, fields(output = %config.output_dir.display()))]
pub fn write_index(
    index: &CategoryIndex,
    config: &GeneratorConfig,
    generated_at: &DateTime<Local>,
) -> Result<PathBuf> {
    info!("Generating main client documentation index...");

    let content = render_index(index, config, generated_at);
    let out_dir = &config.output_dir;
    std::fs::create_dir_all(out_dir).map_err(|e| ClientDocsError::io(out_dir, e))?;

    let target = out_dir.join(INDEX_FILE);
    let temp = out_dir.join(format!(".{INDEX_FILE}.tmp"));

    std::fs::write(&temp, &content).map_err(|e| ClientDocsError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| ClientDocsError::io(&target, e))?;

    debug!(size = content.len(), "wrote index");
    info!("Generated main client documentation index");

    Ok(target)
}

// ---------------------------------------------------------------------------
// Static sections
// ---------------------------------------------------------------------------

fn intro(config: &GeneratorConfig) -> String {
    let package = &config.package_name;
    format!(
        "# {title} Documentation\n\
         \n\
         This section contains the automatically generated documentation for the TypeScript-Axios API client.\n\
         \n\
         ## Installation\n\
         \n\
         ```bash\n\
         npm install {package}@latest\n\
         ```\n\
         \n\
         ## Usage\n\
         \n\
         ```typescript\n\
         import {{ Configuration, DefaultApi }} from '{package}';\n\
         \n\
         const api = new DefaultApi(new Configuration({{ basePath: 'https://your.api.url' }}));\n\
         api.addressIndex().then(response => console.log(response.data));\n\
         ```\n\
         \n",
        title = config.site_title,
    )
}

fn package_info(config: &GeneratorConfig, generated_at: &DateTime<Local>) -> String {
    format!(
        "## Package Information\n\
         \n\
         - **Package Name:** `{package}`\n\
         - **Repository:** [GitHub Packages]({repo})\n\
         - **Generated:** {stamp}\n\
         \n\
         ## Generation\n\
         \n\
         The client is generated using:\n\
         ```powershell\n\
         {generate}\n\
         ```\n\
         \n\
         And published using:\n\
         ```powershell\n\
         {publish}\n\
         ```\n\
         \n\
         ---\n\
         \n\
         *This documentation was automatically generated on {iso}*\n",
        package = config.package_name,
        repo = config.repository_url,
        stamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
        generate = config.generate_command,
        publish = config.publish_command,
        iso = generated_at.format("%Y-%m-%dT%H:%M:%S%.6f"),
    )
}
