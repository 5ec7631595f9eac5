//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: lectura del workbook y conversión de celdas de calamine
//! - `grilla`: la matriz de celdas en memoria y su coerción numérica
//! - `semanas`: decodificación del texto compuesto de semanas
//! - `semestres`: localización de etiquetas y columnas de semestre
//! - `estructura`: clasificación de filas en capítulos/ciclos/módulos/asignaturas
//! - `horas`: extracción de la carga horaria por semestre
//! - `certificaciones`: extracción de las formas de certificación
//! - `documento`: ensamblado del documento final y sanitización

/// Helpers de IO: workbook → grilla
pub mod io;

/// Matriz de celdas y coerciones
pub mod grilla;

/// Decodificación de semanas: `decodificar_semanas`
pub mod semanas;

/// Localización de semestres: `localizar_semestres`, `localizar_columnas_semestre`
pub mod semestres;

/// Árbol estructural: `parsear_estructura`
pub mod estructura;

/// Carga horaria: `extraer_horas`
pub mod horas;

/// Certificaciones: `extraer_certificaciones`
pub mod certificaciones;

/// Ensamblado: `parsear_plan`
pub mod documento;

// Funciones de alto nivel que usa el resto del sistema
pub use certificaciones::{extraer_certificaciones, semestres_en_celda};
pub use documento::{documento_a_json, parsear_plan, sanitizar_documento};
pub use estructura::parsear_estructura;
pub use grilla::{Celda, Grilla};
pub use horas::{IndiceFilas, es_practica, extraer_horas};
pub use io::{leer_grilla, listar_hojas};
pub use semanas::decodificar_semanas;
pub use semestres::{ColumnaSemestre, localizar_columnas_semestre, localizar_semestres};

use crate::models::{CodigosCategoria, DocumentoPlan};
use std::error::Error;
use std::path::Path;

/// Conveniencia: leer un archivo de plan y ensamblar el documento en un paso.
/// `hoja` vacío usa la primera hoja del workbook. El único error posible es
/// no poder cargar la planilla; todo lo demás se recupera localmente.
pub fn leer_plan_excel<P: AsRef<Path>>(
    path: P,
    hoja: &str,
    codigos: &CodigosCategoria,
) -> Result<DocumentoPlan, Box<dyn Error>> {
    let grilla = leer_grilla(path, hoja)?;
    let documento = parsear_plan(&grilla, codigos);
    eprintln!("✅ {}", documento.resumen());
    Ok(documento)
}
