// Biblioteca raíz del crate `plandoc`.
// Recupera un documento curricular jerárquico (capítulos → ciclos → módulos
// → asignaturas) desde planillas sin esquema declarado. La recepción del
// archivo y la persistencia del documento son colaboradores externos.
pub mod excel;
pub mod models;

pub use excel::{leer_plan_excel, parsear_plan};
pub use models::{CodigosCategoria, DocumentoPlan};
