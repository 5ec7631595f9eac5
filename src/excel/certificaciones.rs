//! Extracción de las formas de certificación de una asignatura.
//!
//! Las siete columnas que siguen al nombre traen, por forma de evaluación,
//! los semestres en que aplica: un entero suelto ("5"), un rango ("1-3") o
//! nada. Primero se unen los semestres de las siete celdas y después se
//! reevalúa celda por celda para fijar cada bandera.

use std::collections::HashSet;

use crate::excel::grilla::Grilla;
use crate::excel::horas::IndiceFilas;
use crate::models::{Certificacion, CodigosCategoria};

/// Ancho fijo del bloque de certificaciones tras la columna de nombre.
/// La séptima columna del formato no mapea a ninguna bandera, pero sus
/// semestres participan igual en la unión de la primera pasada.
pub const COLUMNAS_CERTIFICACION: usize = 7;

/// Semestres declarados en una celda: "" → {}, "A-B" → A..=B, entero → {n},
/// cualquier otra cosa → {}.
pub fn semestres_en_celda(texto: &str) -> HashSet<i32> {
    let t = texto.trim();
    let mut semestres = HashSet::new();
    if t.is_empty() {
        return semestres;
    }
    if let Some((desde, hasta)) = t.split_once('-') {
        if let (Ok(a), Ok(b)) = (desde.trim().parse::<i32>(), hasta.trim().parse::<i32>()) {
            for n in a..=b {
                semestres.insert(n);
            }
            return semestres;
        }
    }
    if let Ok(n) = t.parse::<i32>() {
        semestres.insert(n);
    }
    semestres
}

/// Extrae las certificaciones de una asignatura. Sin fila de datos → vacío.
pub fn extraer_certificaciones(
    grilla: &Grilla,
    indice: &IndiceFilas,
    codigos: &CodigosCategoria,
    codigo: &str,
    nombre: &str,
) -> Vec<Certificacion> {
    let Some(fila) = indice.fila_de(codigo, nombre) else {
        return Vec::new();
    };
    extraer_certificaciones_en_fila(grilla, fila, codigos.columna_categoria + 1)
}

/// Versión con la fila y la columna de nombre ya resueltas.
pub fn extraer_certificaciones_en_fila(
    grilla: &Grilla,
    fila: usize,
    columna_nombre: usize,
) -> Vec<Certificacion> {
    let conjuntos: Vec<HashSet<i32>> = (1..=COLUMNAS_CERTIFICACION)
        .map(|i| semestres_en_celda(&grilla.celda(fila, columna_nombre + i).texto()))
        .collect();

    // pasada 1: todos los semestres evaluados en alguna de las siete celdas
    let mut semestres: HashSet<i32> = HashSet::new();
    for conjunto in &conjuntos {
        semestres.extend(conjunto);
    }

    // pasada 2: banderas por semestre (orden de conjunto, sin ordenar).
    // La columna de exámenes alimenta la bandera `credito`.
    let mut certificaciones = Vec::new();
    for semestre in semestres {
        let mut cert = Certificacion::vacia(semestre);
        cert.credito = conjuntos[0].contains(&semestre);
        cert.credito_diferenciado = conjuntos[1].contains(&semestre);
        cert.proyecto_curso = conjuntos[2].contains(&semestre);
        cert.trabajo_curso = conjuntos[3].contains(&semestre);
        cert.trabajo_control = conjuntos[4].contains(&semestre);
        cert.otra_forma = conjuntos[5].contains(&semestre);
        if cert.alguna() {
            certificaciones.push(cert);
        }
    }
    certificaciones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::grilla::Celda;

    #[test]
    fn test_semestres_en_celda() {
        assert_eq!(
            semestres_en_celda("1-3"),
            HashSet::from([1, 2, 3])
        );
        assert_eq!(semestres_en_celda("5"), HashSet::from([5]));
        assert!(semestres_en_celda("").is_empty());
        assert!(semestres_en_celda("a-b").is_empty());
        assert!(semestres_en_celda("anual").is_empty());
    }

    fn fila_certificaciones(celdas: [&str; 7]) -> Grilla {
        let mut fila = vec![Celda::Vacia, Celda::Vacia]; // codigo, nombre
        for c in celdas {
            fila.push(if c.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(c.to_string())
            });
        }
        Grilla::desde_filas(vec![fila])
    }

    #[test]
    fn test_examen_alimenta_credito() {
        let g = fila_certificaciones(["1", "", "", "", "", "", ""]);
        let certs = extraer_certificaciones_en_fila(&g, 0, 1);
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].semestre, 1);
        assert!(certs[0].credito);
        assert!(!certs[0].credito_diferenciado);
        assert!(!certs[0].otra_forma);
    }

    #[test]
    fn test_rango_y_forma_suelta() {
        let g = fila_certificaciones(["", "1-3", "", "", "3", "", ""]);
        let mut certs = extraer_certificaciones_en_fila(&g, 0, 1);
        certs.sort_by_key(|c| c.semestre);
        assert_eq!(certs.len(), 3);
        assert!(certs.iter().all(|c| c.credito_diferenciado));
        assert!(certs[2].trabajo_control);
        assert!(!certs[0].trabajo_control);
    }

    #[test]
    fn test_septima_columna_no_emite() {
        // el semestre aparece sólo en la columna sin bandera: entra a la
        // unión pero ninguna bandera queda en true, así que no hay registro
        let g = fila_certificaciones(["", "", "", "", "", "", "4"]);
        let certs = extraer_certificaciones_en_fila(&g, 0, 1);
        assert!(certs.is_empty());
    }

    #[test]
    fn test_celda_numerica() {
        let mut fila = vec![Celda::Vacia, Celda::Vacia];
        fila.push(Celda::Numero(2.0)); // examen en el semestre 2
        let g = Grilla::desde_filas(vec![fila]);
        let certs = extraer_certificaciones_en_fila(&g, 0, 1);
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].semestre, 2);
        assert!(certs[0].credito);
    }
}
