//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for a site root with the `data/projects` layout
pub struct SiteDirBuilder {
    temp_dir: TempDir,
}

impl SiteDirBuilder {
    /// Create a new builder with an empty root (no data/ directory yet)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the root path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the projects directory under the root
    pub fn projects_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data").join("projects")
    }

    /// Add a project document built from a [`ProjectBuilder`]
    pub fn with_project(self, filename: &str, project: ProjectBuilder) -> Self {
        self.with_raw_file(filename, &project.to_json())
    }

    /// Add a file with arbitrary content to the projects directory
    pub fn with_raw_file(self, filename: &str, content: &str) -> Self {
        let projects_dir = self.projects_dir();
        fs::create_dir_all(&projects_dir).expect("Failed to create projects dir");
        fs::write(projects_dir.join(filename), content).expect("Failed to write project file");
        self
    }

    /// Create the projects directory without any documents
    pub fn with_empty_projects_dir(self) -> Self {
        fs::create_dir_all(self.projects_dir()).expect("Failed to create projects dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SiteDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for project documents
pub struct ProjectBuilder {
    root: Map<String, Value>,
    search: Option<Map<String, Value>>,
}

impl ProjectBuilder {
    /// Create a project document with no fields at all
    pub fn new() -> Self {
        Self { root: Map::new(), search: None }
    }

    /// Set the project_key field
    pub fn key(mut self, key: &str) -> Self {
        self.root.insert("project_key".to_string(), json!(key));
        self
    }

    /// Set the slug field
    pub fn slug(mut self, slug: &str) -> Self {
        self.root.insert("slug".to_string(), json!(slug));
        self
    }

    /// Set any top-level field
    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.root.insert(name.to_string(), value);
        self
    }

    /// Set an attribute in the `_search` block (creates the block)
    pub fn search(mut self, name: &str, value: Value) -> Self {
        self.search.get_or_insert_with(Map::new).insert(name.to_string(), value);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let mut root = self.root.clone();
        if let Some(search) = &self.search {
            root.insert("_search".to_string(), Value::Object(search.clone()));
        }
        Value::Object(root).to_string()
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully populated project document
pub fn complete_project(key: &str, slug: &str) -> ProjectBuilder {
    ProjectBuilder::new()
        .key(key)
        .slug(slug)
        .search("emirate", json!("Dubai"))
        .search("city", json!("Dubai"))
        .search("area", json!("Business Bay"))
        .search("developer", json!("Damac"))
        .search("property_types", json!(["Apartment", "Penthouse"]))
        .search("bedrooms_min", json!(1))
        .search("bedrooms_max", json!(3))
        .search("handover_year", json!(2027))
        .search("price_from_aed", json!("AED 1,250,000"))
        .search("size_from_sqft", json!(680))
}

/// A site with a realistic mix of complete, partial and broken documents
pub fn realistic_site() -> TempDir {
    SiteDirBuilder::new()
        .with_project("01-bay-towers.json", complete_project("DAMAC-BT", "bay-towers"))
        .with_project(
            "02-palm-villas.json",
            ProjectBuilder::new()
                .key("NKH-PV")
                .slug("palm-villas")
                .search("emirate", json!("Dubai"))
                .search("area", json!("Palm Jumeirah"))
                .search("developer", json!("Nakheel"))
                .search("property_types", json!(["Villa"]))
                .search("bedrooms_min", json!("4"))
                .search("bedrooms_max", json!("6")),
        )
        .with_project("03-no-metadata.json", ProjectBuilder::new().slug("no-metadata"))
        .with_raw_file("04-broken.json", r#"{"project_key": "BROKEN", "_search": {"#)
        .with_project(
            "05-saadiyat.json",
            ProjectBuilder::new()
                .search("emirate", json!("Abu Dhabi"))
                .search("city", json!("Abu Dhabi"))
                .search("area", json!("Saadiyat Island"))
                .search("developer", json!("Aldar"))
                .search("property_types", json!(["Townhouse", "Villa"]))
                .search("bedrooms_min", json!(3))
                .search("bedrooms_max", json!(5))
                .search("handover_year", json!("Q2 2028"))
                .search("price_from_aed", json!("from 3.2M")),
        )
        .with_raw_file("README.md", "# not a project")
        .build()
}
