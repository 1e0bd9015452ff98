pub mod auth;
pub mod draft;
pub mod product;

pub use auth::{ApiMessage, Credentials, SessionToken, SignInResponse};
pub use draft::{merge_into_template, to_wire_format, DraftField, DraftProduct, FieldInput};
pub use product::{DataEnvelope, Product, ProductPayload, ProductsResponse};
