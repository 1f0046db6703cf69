//! Title extraction and classification into the category index.
//!
//! Categories are decided by filename alone, with a fixed precedence: the
//! first matching rule wins, even when a later rule is more specific.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use clientdocs_shared::{Category, SourceDocument};

const API_SUFFIX: &str = "Api.md";
const REQUEST_MARKERS: [&str; 3] = ["Request.md", "StoreRequest.md", "UpdateRequest.md"];
const RESPONSE_MARKERS: [&str; 6] = [
    "Response.md",
    "200Response.md",
    "201Response.md",
    "404Response.md",
    "422Response.md",
    "500Response.md",
];
const RESOURCE_SUFFIX: &str = "Resource.md";

/// Classify a generated file by its name (e.g. `AddressApi.md`).
pub fn classify(file_name: &str) -> Category {
    if file_name.ends_with(API_SUFFIX) {
        Category::Apis
    } else if REQUEST_MARKERS.iter().any(|m| file_name.contains(m)) {
        Category::Requests
    } else if RESPONSE_MARKERS.iter().any(|m| file_name.contains(m)) {
        Category::Responses
    } else if file_name.ends_with(RESOURCE_SUFFIX) {
        Category::Models
    } else {
        Category::Other
    }
}

/// Display title for a document, falling back to its base name.
pub fn document_title(doc: &SourceDocument) -> String {
    doc.content
        .as_deref()
        .and_then(clientdocs_markdown::extract_title)
        .unwrap_or_else(|| doc.stem())
}

/// A classified document and its display title.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub document: SourceDocument,
    pub title: String,
}

impl CatalogEntry {
    /// Jekyll slug shared by the page filename and index links.
    pub fn slug(&self) -> String {
        clientdocs_markdown::jekyll_slug(&self.document.stem())
    }
}

/// Documents grouped by category, sorted by title within each bucket.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    buckets: BTreeMap<Category, Vec<CatalogEntry>>,
}

impl CategoryIndex {
    /// Classify every document and sort each bucket by title.
    #[instrument(skip_all, fields(documents = documents.len()))]
    pub fn build(documents: Vec<SourceDocument>) -> Self {
        let mut buckets: BTreeMap<Category, Vec<CatalogEntry>> = BTreeMap::new();

        for document in documents {
            let category = classify(&document.file_name());
            let title = document_title(&document);
            debug!(file = %document.file_name(), %category, %title, "classified");
            buckets
                .entry(category)
                .or_default()
                .push(CatalogEntry { document, title });
        }

        // Stable, so equal titles keep discovery order
        for entries in buckets.values_mut() {
            entries.sort_by(|a, b| a.title.cmp(&b.title));
        }

        let index = Self { buckets };
        for (category, entries) in index.iter() {
            info!("{category}: {} files", entries.len());
        }
        index
    }

    /// Entries for one category (empty slice if none).
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty categories in section order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CatalogEntry])> {
        self.buckets
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    /// Entry count per non-empty category, in section order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        self.iter().map(|(c, entries)| (c, entries.len())).collect()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the entries matching `keep`; sort order is preserved.
    pub fn retain(&mut self, mut keep: impl FnMut(&CatalogEntry) -> bool) {
        for entries in self.buckets.values_mut() {
            entries.retain(|e| keep(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use super::*;

    fn doc(name: &str, content: Option<&str>) -> SourceDocument {
        SourceDocument {
            path: PathBuf::from("api-client/docs").join(name),
            content: content.map(String::from),
        }
    }

    #[test]
    fn classify_by_suffix() {
        assert_eq!(classify("AddressApi.md"), Category::Apis);
        assert_eq!(classify("CreateAddressRequest.md"), Category::Requests);
        assert_eq!(classify("AddressStoreRequest.md"), Category::Requests);
        assert_eq!(classify("AddressIndex200Response.md"), Category::Responses);
        assert_eq!(classify("AddressResource.md"), Category::Models);
        assert_eq!(classify("Configuration.md"), Category::Other);
    }

    #[test]
    fn request_rule_wins_over_resource_rule() {
        // Contains `Request.md` and ends with `Resource.md`
        let name = "ContextRequest.mdResource.md";
        assert!(name.ends_with("Resource.md"));
        assert_eq!(classify(name), Category::Requests);
    }

    #[test]
    fn api_rule_wins_over_response_rule() {
        let name = "Legacy200Response.mdApi.md";
        assert_eq!(classify(name), Category::Apis);
    }

    #[test]
    fn resource_without_md_suffix_is_other() {
        assert_eq!(classify("AddressResource.markdown"), Category::Other);
    }

    #[test]
    fn title_falls_back_to_stem() {
        let no_heading = doc("AddressResource.md", Some("no heading"));
        assert_eq!(document_title(&no_heading), "AddressResource");
        assert_eq!(document_title(&doc("Broken.md", None)), "Broken");
        let heading = doc("AddressApi.md", Some("# Address Api"));
        assert_eq!(document_title(&heading), "Address Api");
    }

    #[test]
    fn index_is_total_and_disjoint() {
        let docs = vec![
            doc("AddressApi.md", Some("# Address Api")),
            doc("AddressResource.md", Some("")),
            doc("CreateAddressRequest.md", None),
            doc("AddressShow200Response.md", Some("# Show")),
            doc("Configuration.md", Some("# Configuration")),
            doc("ContextApi.md", Some("# Context Api")),
        ];
        let all: HashSet<PathBuf> = docs.iter().map(|d| d.path.clone()).collect();

        let index = CategoryIndex::build(docs);

        let mut seen = HashSet::new();
        for category in Category::ALL {
            for entry in index.entries(category) {
                assert!(seen.insert(entry.document.path.clone()), "classified twice");
            }
        }
        assert_eq!(seen, all);
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn buckets_sorted_by_title() {
        let index = CategoryIndex::build(vec![
            doc("ZoneApi.md", Some("# Alpha Zone")),
            doc("AddressApi.md", Some("# Beta Address")),
            doc("ContextApi.md", Some("# Alpha Context")),
        ]);

        let titles: Vec<_> = index
            .entries(Category::Apis)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["Alpha Context", "Alpha Zone", "Beta Address"]);
    }

    #[test]
    fn iter_skips_empty_categories_in_order() {
        let mut index = CategoryIndex::build(vec![
            doc("Configuration.md", Some("")),
            doc("AddressApi.md", Some("")),
            doc("AddressResource.md", Some("")),
        ]);
        assert_eq!(
            index.counts(),
            vec![(Category::Apis, 1), (Category::Models, 1), (Category::Other, 1)]
        );

        index.retain(|e| e.document.content.is_some() && e.title != "AddressApi");
        let categories: Vec<_> = index.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, [Category::Models, Category::Other]);
    }

    #[test]
    fn entry_slug_comes_from_file_stem() {
        let index = CategoryIndex::build(vec![doc("My_File.md", Some("# Something"))]);
        assert_eq!(index.entries(Category::Other)[0].slug(), "my-file");
    }
}
