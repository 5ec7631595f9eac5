use calamine::{Data, Reader, open_workbook_auto};
use std::error::Error;
use std::path::Path;

use crate::excel::grilla::{Celda, Grilla};

/// Convierte un `Data` de calamine a `Celda`.
pub fn celda_de_dato(d: &Data) -> Celda {
    match d {
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(t.to_string())
            }
        }
        Data::Float(f) => Celda::Numero(*f),
        Data::Int(i) => Celda::Numero(*i as f64),
        Data::Bool(b) => Celda::Numero(if *b { 1.0 } else { 0.0 }),
        // fechas, errores y vacíos no aportan datos al plan
        _ => Celda::Vacia,
    }
}

fn filas_de_rango(range: &calamine::Range<Data>) -> Vec<Vec<Celda>> {
    range
        .rows()
        .map(|fila| fila.iter().map(celda_de_dato).collect())
        .collect()
}

/// Lista las hojas (sheet names) del workbook en el orden que reporta la librería.
pub fn listar_hojas<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let workbook = open_workbook_auto(path)?;
    Ok(workbook.sheet_names().to_owned())
}

/// Lee una hoja del archivo Excel y la materializa como `Grilla`.
/// Preferir la hoja con el nombre solicitado; si no existe (o `hoja` viene
/// vacío) se toma la primera. Si la hoja elegida no entrega filas se prueban
/// las demás hojas antes de rendirse.
pub fn leer_grilla<P: AsRef<Path>>(path: P, hoja: &str) -> Result<Grilla, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(&path)?;
    let nombres = workbook.sheet_names().to_owned();
    if nombres.is_empty() {
        return Err("No se encontraron hojas en el archivo Excel".into());
    }

    let elegida = if hoja.is_empty() {
        nombres[0].clone()
    } else {
        nombres
            .iter()
            .find(|n| *n == hoja)
            .cloned()
            .unwrap_or_else(|| nombres[0].clone())
    };

    if let Ok(range) = workbook.worksheet_range(&elegida) {
        let filas = filas_de_rango(&range);
        if !filas.is_empty() {
            return Ok(Grilla::desde_filas(filas));
        }
    }

    // Fallback: probar el resto de las hojas en orden
    for nombre in nombres.iter().filter(|n| **n != elegida) {
        if let Ok(range) = workbook.worksheet_range(nombre) {
            let filas = filas_de_rango(&range);
            if !filas.is_empty() {
                eprintln!(
                    "DEBUG: hoja '{}' sin datos, usando '{}' en su lugar",
                    elegida, nombre
                );
                return Ok(Grilla::desde_filas(filas));
            }
        }
    }

    // Último recurso: inspeccionar el zip para reportar qué worksheets trae
    // el archivo (calamine abrió el workbook pero ninguna hoja entregó filas)
    let mut partes = 0usize;
    if let Ok(archivo) = std::fs::File::open(&path) {
        if let Ok(archive) = zip::ZipArchive::new(archivo) {
            partes = archive
                .file_names()
                .filter(|n| n.starts_with("xl/worksheets/sheet"))
                .count();
        }
    }
    Err(format!(
        "No se pudo leer ninguna hoja con datos ({} worksheets en el archivo)",
        partes
    )
    .into())
}
