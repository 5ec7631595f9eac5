//! Extracción de la carga horaria por semestre de una asignatura.
//!
//! La fila de datos de la asignatura se ubica por coincidencia exacta de
//! (código, nombre) y, por cada columna de semestre descubierta, se lee una
//! ventana de 11 celdas `[ancla, f1..f10]` con la coerción numérica total de
//! la grilla.

use std::collections::HashMap;

use crate::excel::grilla::Grilla;
use crate::excel::semestres::ColumnaSemestre;
use crate::models::{CodigosCategoria, HorasAsignatura};

/// Marcadores (en minúsculas) que clasifican una asignatura como práctica.
pub const MARCADORES_PRACTICA: &[&str] =
    &["práctica", "practica", "pasantía", "pasantia", "internado"];

/// Horas de cátedra sintetizadas por cada hora práctica en asignaturas de
/// práctica. Constante institucional.
pub const FACTOR_CATEDRA_PRACTICA: f64 = 36.0;

/// Ancho de la ventana de datos por semestre: ancla + f1..f10.
const ANCHO_VENTANA: usize = 11;

/// Índice (código, nombre) → fila, construido una sola vez recorriendo la
/// grilla de arriba hacia abajo. Ante duplicados gana la primera aparición,
/// igual que el rescaneo fila a fila al que reemplaza.
#[derive(Debug)]
pub struct IndiceFilas {
    indice: HashMap<(String, String), usize>,
}

impl IndiceFilas {
    pub fn construir(grilla: &Grilla, codigos: &CodigosCategoria) -> Self {
        let mut indice = HashMap::new();
        for fila in 0..grilla.alto() {
            let codigo = grilla.celda(fila, codigos.columna_categoria).texto();
            if codigo.is_empty() {
                continue;
            }
            let nombre = grilla.celda(fila, codigos.columna_categoria + 1).texto();
            indice.entry((codigo, nombre)).or_insert(fila);
        }
        IndiceFilas { indice }
    }

    pub fn fila_de(&self, codigo: &str, nombre: &str) -> Option<usize> {
        self.indice
            .get(&(codigo.to_string(), nombre.to_string()))
            .copied()
    }
}

pub fn es_practica(nombre: &str) -> bool {
    let bajo = nombre.to_lowercase();
    MARCADORES_PRACTICA.iter().any(|m| bajo.contains(m))
}

/// Extrae los registros de horas de una asignatura, en el orden de
/// descubrimiento de las columnas. Sin fila de datos → lista vacía.
pub fn extraer_horas(
    grilla: &Grilla,
    indice: &IndiceFilas,
    columnas: &[ColumnaSemestre],
    codigo: &str,
    nombre: &str,
) -> Vec<HorasAsignatura> {
    let Some(fila) = indice.fila_de(codigo, nombre) else {
        eprintln!("DEBUG: asignatura '{}' ('{}') sin fila de datos", codigo, nombre);
        return Vec::new();
    };
    extraer_horas_en_fila(grilla, fila, nombre, columnas)
}

/// Versión con la fila ya resuelta.
pub fn extraer_horas_en_fila(
    grilla: &Grilla,
    fila: usize,
    nombre: &str,
    columnas: &[ColumnaSemestre],
) -> Vec<HorasAsignatura> {
    let practica = es_practica(nombre);
    let mut horas = Vec::new();

    for col in columnas {
        let v: Vec<f64> = (0..ANCHO_VENTANA)
            .map(|i| grilla.celda(fila, col.columna + i).numero())
            .collect();
        let ancla = v[0];

        if practica {
            // las prácticas sólo traen horas en f4; sin f4 no hay registro
            // aunque el ancla venga con datos
            if v[4] == 0.0 {
                continue;
            }
            let mut h = HorasAsignatura::vacio(col.numero);
            h.horas_practicas = Some(v[4]);
            h.horas_catedra = Some(FACTOR_CATEDRA_PRACTICA * v[4]);
            horas.push(h);
        } else {
            if ancla == 0.0 && v[4] == 0.0 {
                continue;
            }
            // f2 y f10 no llevan datos en este formato
            horas.push(HorasAsignatura {
                semestre: col.numero,
                horas_autonomas: Some(v[1]),
                horas_catedra: Some(v[3]),
                horas_practicas: Some(v[4]),
                horas_laboratorio: Some(v[5]),
                horas_evaluacion_intermedia: Some(v[6]),
                horas_proyecto_curso: Some(v[7]),
                horas_consulta: Some(v[8]),
                horas_certificacion: Some(v[9]),
            });
        }
    }

    horas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::grilla::Celda;

    fn n(v: f64) -> Celda {
        Celda::Numero(v)
    }

    fn columna(numero: i32, columna: usize) -> ColumnaSemestre {
        ColumnaSemestre {
            numero,
            columna,
            fila: 0,
        }
    }

    fn fila_datos(ventana: [f64; 11]) -> Grilla {
        Grilla::desde_filas(vec![ventana.iter().map(|v| n(*v)).collect()])
    }

    #[test]
    fn test_ventana_en_cero_no_emite() {
        let g = fila_datos([0.0; 11]);
        let horas = extraer_horas_en_fila(&g, 0, "Psicologia", &[columna(1, 0)]);
        assert!(horas.is_empty());
    }

    #[test]
    fn test_mapeo_no_practica() {
        let g = fila_datos([100.0, 20.0, 9.0, 36.0, 18.0, 8.0, 6.0, 4.0, 2.0, 1.0, 5.0]);
        let horas = extraer_horas_en_fila(&g, 0, "Psicologia", &[columna(1, 0)]);
        assert_eq!(horas.len(), 1);
        let h = &horas[0];
        assert_eq!(h.semestre, 1);
        assert_eq!(h.horas_autonomas, Some(20.0));
        assert_eq!(h.horas_catedra, Some(36.0));
        assert_eq!(h.horas_practicas, Some(18.0));
        assert_eq!(h.horas_laboratorio, Some(8.0));
        assert_eq!(h.horas_evaluacion_intermedia, Some(6.0));
        assert_eq!(h.horas_proyecto_curso, Some(4.0));
        assert_eq!(h.horas_consulta, Some(2.0));
        assert_eq!(h.horas_certificacion, Some(1.0));
    }

    #[test]
    fn test_f4_dispara_sin_ancla() {
        let mut ventana = [0.0; 11];
        ventana[4] = 12.0;
        let g = fila_datos(ventana);
        let horas = extraer_horas_en_fila(&g, 0, "Psicologia", &[columna(2, 0)]);
        assert_eq!(horas.len(), 1);
        assert_eq!(horas[0].horas_practicas, Some(12.0));
    }

    #[test]
    fn test_practica_sin_f4_no_emite_aunque_haya_ancla() {
        let mut ventana = [0.0; 11];
        ventana[0] = 144.0;
        let g = fila_datos(ventana);
        let horas = extraer_horas_en_fila(&g, 0, "Practica profesional", &[columna(1, 0)]);
        assert!(horas.is_empty());
    }

    #[test]
    fn test_practica_sintetiza_catedra() {
        let mut ventana = [0.0; 11];
        ventana[4] = 2.0;
        let g = fila_datos(ventana);
        let horas = extraer_horas_en_fila(&g, 0, "Pasantía clínica", &[columna(3, 0)]);
        assert_eq!(horas.len(), 1);
        let h = &horas[0];
        assert_eq!(h.horas_practicas, Some(2.0));
        assert_eq!(h.horas_catedra, Some(72.0));
        assert_eq!(h.horas_autonomas, Some(0.0));
    }

    #[test]
    fn test_celda_textual_numerica_cuenta() {
        let mut fila: Vec<Celda> = (0..11).map(|_| Celda::Vacia).collect();
        fila[0] = Celda::Texto("108".to_string());
        fila[3] = Celda::Texto("36".to_string());
        fila[4] = Celda::Texto("36 hrs".to_string()); // mixto: vale 0
        let g = Grilla::desde_filas(vec![fila]);
        let horas = extraer_horas_en_fila(&g, 0, "Algebra", &[columna(1, 0)]);
        assert_eq!(horas.len(), 1);
        assert_eq!(horas[0].horas_catedra, Some(36.0));
        assert_eq!(horas[0].horas_practicas, Some(0.0));
    }

    #[test]
    fn test_indice_primera_aparicion_gana() {
        let t = |s: &str| Celda::Texto(s.to_string());
        let g = Grilla::desde_filas(vec![
            vec![Celda::Vacia, t("PSY101"), t("Psicologia"), n(1.0)],
            vec![Celda::Vacia, t("PSY101"), t("Psicologia"), n(2.0)],
        ]);
        let indice = IndiceFilas::construir(&g, &CodigosCategoria::default());
        assert_eq!(indice.fila_de("PSY101", "Psicologia"), Some(0));
        assert_eq!(indice.fila_de("PSY101", "Otra"), None);
    }

    #[test]
    fn test_asignatura_sin_fila_lista_vacia() {
        let g = Grilla::vacia();
        let indice = IndiceFilas::construir(&g, &CodigosCategoria::default());
        let horas = extraer_horas(&g, &indice, &[columna(1, 0)], "PSY101", "Psicologia");
        assert!(horas.is_empty());
    }
}
