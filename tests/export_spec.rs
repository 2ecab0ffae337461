use std::fs;

use speculate2::speculate;
use toolshelf::export::{export_site, CATALOG_FILE, INDEX_FILE};
use toolshelf_core::Catalog;

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog = Catalog::embedded().expect("Failed to load catalog");
    }

    describe "export_site" {
        it "writes the page and the catalog" {
            let summary = export_site(&catalog, dir.path()).expect("Export failed");

            assert_eq!(summary.files, vec![dir.path().join(INDEX_FILE), dir.path().join(CATALOG_FILE)]);
            assert_eq!(summary.tools, catalog.tool_count());

            let html = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("./pkg/toolshelf_core.js"));
        }

        it "writes a catalog that reads back unchanged" {
            export_site(&catalog, dir.path()).expect("Export failed");

            let json = fs::read_to_string(dir.path().join(CATALOG_FILE)).unwrap();
            assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
        }

        it "writes a catalog dump the page does not depend on" {
            export_site(&catalog, dir.path()).expect("Export failed");

            let html = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
            assert!(!html.contains(CATALOG_FILE));

            let json = fs::read_to_string(dir.path().join(CATALOG_FILE)).unwrap();
            let served = serde_json::to_string_pretty(&catalog).unwrap();
            assert_eq!(json, served);
        }

        it "creates missing output directories" {
            let nested = dir.path().join("site").join("public");

            export_site(&catalog, &nested).expect("Export failed");

            assert!(nested.join(INDEX_FILE).is_file());
        }

        it "fails when the output path is a file" {
            let file = dir.path().join("taken");
            fs::write(&file, "x").unwrap();

            assert!(export_site(&catalog, &file).is_err());
        }
    }
}
