//! OpenAPI description of the HTTP surface.
//!
//! The document is derived from the `#[utoipa::path]` annotations on the handlers in
//! [`crate::http::routes`]. It is a build artifact for tooling: it is written to disk at
//! startup (or by the `openapi` subcommand) and is not served by the running registry.

use crate::http::error::ErrorResponse;
use crate::http::routes::{self, CreateProductRequest};
use crate::model::Product;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use utoipa::openapi::{InfoBuilder, OpenApi as OpenApiDocument, Server};
use utoipa::OpenApi;

pub const TITLE: &str = "OpenAPI demo";
pub const VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub enum OpenApiError {
    #[error("failed to render OpenAPI document: {0}")]
    Render(String),

    #[error("failed to write OpenAPI document to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::list_products,
        routes::create_product,
        routes::get_product,
        routes::delete_product
    ),
    components(schemas(Product, CreateProductRequest, ErrorResponse)),
    tags((name = "product", description = "Product registry operations"))
)]
pub struct ApiDoc;

/// Builds the OpenAPI document for a registry reachable at `server_url`.
pub fn document(server_url: &str) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.info = InfoBuilder::new()
        .title(TITLE)
        .version(VERSION)
        .description(Some(
            "In-memory product registry: list, create, fetch and delete products.",
        ))
        .build();
    doc.servers = Some(vec![Server::new(server_url)]);
    doc
}

/// Renders the document as YAML.
pub fn to_yaml(doc: &OpenApiDocument) -> Result<String, OpenApiError> {
    doc.to_yaml().map_err(|e| OpenApiError::Render(e.to_string()))
}

/// Writes the document as YAML to `path`, replacing any previous file.
pub fn write_document(doc: &OpenApiDocument, path: &Path) -> Result<(), OpenApiError> {
    let yaml = to_yaml(doc)?;
    std::fs::write(path, yaml).map_err(|source| OpenApiError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Wrote OpenAPI document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn as_json(doc: &OpenApiDocument) -> Value {
        serde_json::from_str(&doc.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_document_metadata() {
        let json = as_json(&document("http://localhost:8080"));
        assert_eq!(json["info"]["title"], TITLE);
        assert_eq!(json["info"]["version"], VERSION);
        assert_eq!(json["servers"][0]["url"], "http://localhost:8080");
        assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    }

    #[test]
    fn test_document_operations() {
        let json = as_json(&document("http://localhost:8080"));
        let paths = &json["paths"];
        assert_eq!(paths["/products"]["get"]["operationId"], "getProducts");
        assert_eq!(paths["/products"]["post"]["operationId"], "createProduct");
        assert_eq!(paths["/products/{productId}"]["get"]["operationId"], "getProduct");
        assert_eq!(
            paths["/products/{productId}"]["delete"]["operationId"],
            "deleteProduct"
        );
        assert_eq!(paths["/products"]["get"]["tags"][0], "product");

        let created = &paths["/products"]["post"]["responses"];
        assert!(created.get("201").is_some());
        assert!(created.get("400").is_some());
        assert!(paths["/products/{productId}"]["delete"]["responses"]
            .get("204")
            .is_some());

        let error_ref = "#/components/schemas/ErrorResponse";
        assert_eq!(
            created["400"]["content"]["application/json"]["schema"]["$ref"],
            error_ref
        );
        assert_eq!(
            paths["/products/{productId}"]["get"]["responses"]["404"]["content"]["application/json"]
                ["schema"]["$ref"],
            error_ref
        );
    }

    #[test]
    fn test_document_schemas() {
        let json = as_json(&document("http://localhost:8080"));
        let schemas = &json["components"]["schemas"];
        assert_eq!(schemas["Product"]["properties"]["id"]["type"], "integer");
        assert_eq!(schemas["Product"]["properties"]["name"]["type"], "string");
        assert_eq!(schemas["ErrorResponse"]["properties"]["error"]["type"], "string");
        let required = schemas["CreateProductRequest"]["required"]
            .as_array()
            .unwrap();
        assert!(required.contains(&Value::from("name")));
    }

    #[test]
    fn test_yaml_rendering() {
        let yaml = to_yaml(&document("http://localhost:9000")).unwrap();
        assert!(yaml.contains("OpenAPI demo"));
        assert!(yaml.contains("http://localhost:9000"));
        assert!(yaml.contains("deleteProduct"));
    }
}
