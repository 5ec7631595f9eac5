//! Localización de semestres dentro de la grilla.
//!
//! La planilla no declara encabezados: los semestres se descubren por
//! contenido. Hay dos pasadas independientes:
//! - etiquetas de semanas ("1 semestre" con las semanas en la celda de abajo)
//! - encabezados de columna de datos ("Semestre 3")

use crate::excel::grilla::Grilla;
use crate::excel::semanas::decodificar_semanas;
use crate::models::Semestre;

/// Token que identifica una celda de semestre, comparado en minúsculas.
pub const TOKEN_SEMESTRE: &str = "semestre";

/// Encabezado de columna de datos de un semestre. Los duplicados se
/// conservan: cada aparición se procesa por separado aguas abajo.
#[derive(Debug, Clone)]
pub struct ColumnaSemestre {
    pub numero: i32,
    pub columna: usize,
    pub fila: usize,
}

/// Primera corrida de dígitos contiguos del texto.
fn primer_numero(s: &str) -> Option<i32> {
    let mut run = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else if !run.is_empty() {
            break;
        }
    }
    run.parse().ok()
}

/// Pasada de etiquetas: toda celda que contenga el token produce un
/// `Semestre`, en orden fila-mayor. El número sale de los dígitos de la
/// etiqueta misma (0 si no hay); las semanas, de la celda inmediatamente
/// debajo en la misma columna (vacía → 0 semanas, la etiqueta igual cuenta).
pub fn localizar_semestres(grilla: &Grilla) -> Vec<Semestre> {
    let mut semestres = Vec::new();
    for (fila, columna, celda) in grilla.celdas() {
        let texto = celda.texto();
        if !texto.to_lowercase().contains(TOKEN_SEMESTRE) {
            continue;
        }
        let numero = primer_numero(&texto).unwrap_or(0);
        let abajo = grilla.celda(fila + 1, columna).texto();
        let (semanas, practica) = decodificar_semanas(&abajo);
        semestres.push(Semestre {
            numero,
            semanas: Some(semanas),
            semanas_practica: Some(practica),
        });
    }
    semestres
}

/// Pasada de encabezados: toda celda "semestre N" (N obligatorio, después
/// del token) registra número y coordenadas. No se deduplica por número.
pub fn localizar_columnas_semestre(grilla: &Grilla) -> Vec<ColumnaSemestre> {
    let mut columnas = Vec::new();
    for (fila, columna, celda) in grilla.celdas() {
        let bajo = celda.texto().to_lowercase();
        let Some(pos) = bajo.find(TOKEN_SEMESTRE) else {
            continue;
        };
        if let Some(numero) = primer_numero(&bajo[pos + TOKEN_SEMESTRE.len()..]) {
            columnas.push(ColumnaSemestre {
                numero,
                columna,
                fila,
            });
        }
    }
    columnas
}
