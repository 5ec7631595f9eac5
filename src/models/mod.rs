// Estructuras de datos del documento curricular

use std::collections::HashSet;

/// Semestre detectado en la planilla: número y semanas lectivas/de práctica.
/// Las semanas quedan en `None` cuando el valor decodificado no es finito
/// (ver sanitización en `excel::documento`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Semestre {
    pub numero: i32,
    pub semanas: Option<f64>,
    pub semanas_practica: Option<f64>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Capitulo {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub ciclos: Vec<Ciclo>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Ciclo {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    /// true cuando el ciclo se subdivide en módulos; en ese caso las
    /// asignaturas cuelgan de los módulos y `asignaturas` queda vacío.
    pub tiene_modulos: bool,
    pub modulos: Vec<Modulo>,
    pub asignaturas: Vec<Asignatura>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Modulo {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub asignaturas: Vec<Asignatura>,
}

/// Una asignatura cuelga de exactamente un padre: `id_ciclo` cuando va
/// directo bajo un ciclo, `id_modulo` cuando va bajo un módulo. Nunca ambos.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Asignatura {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub id_ciclo: Option<i32>,
    pub id_modulo: Option<i32>,
    pub horas: Vec<HorasAsignatura>,
    pub certificaciones: Vec<Certificacion>,
}

/// Carga horaria de una asignatura en un semestre. Los campos en `None`
/// representan valores ausentes o no serializables.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HorasAsignatura {
    pub semestre: i32,
    pub horas_autonomas: Option<f64>,
    pub horas_catedra: Option<f64>,
    pub horas_practicas: Option<f64>,
    pub horas_laboratorio: Option<f64>,
    pub horas_evaluacion_intermedia: Option<f64>,
    pub horas_proyecto_curso: Option<f64>,
    pub horas_consulta: Option<f64>,
    pub horas_certificacion: Option<f64>,
}

impl HorasAsignatura {
    /// Registro con todas las horas en cero para un semestre dado.
    pub fn vacio(semestre: i32) -> Self {
        HorasAsignatura {
            semestre,
            horas_autonomas: Some(0.0),
            horas_catedra: Some(0.0),
            horas_practicas: Some(0.0),
            horas_laboratorio: Some(0.0),
            horas_evaluacion_intermedia: Some(0.0),
            horas_proyecto_curso: Some(0.0),
            horas_consulta: Some(0.0),
            horas_certificacion: Some(0.0),
        }
    }
}

/// Formas de certificación de una asignatura en un semestre. Se emite sólo
/// cuando al menos una bandera es verdadera.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Certificacion {
    pub semestre: i32,
    pub credito: bool,
    pub credito_diferenciado: bool,
    pub proyecto_curso: bool,
    pub trabajo_curso: bool,
    pub trabajo_control: bool,
    pub otra_forma: bool,
}

impl Certificacion {
    pub fn vacia(semestre: i32) -> Self {
        Certificacion {
            semestre,
            credito: false,
            credito_diferenciado: false,
            proyecto_curso: false,
            trabajo_curso: false,
            trabajo_control: false,
            otra_forma: false,
        }
    }

    pub fn alguna(&self) -> bool {
        self.credito
            || self.credito_diferenciado
            || self.proyecto_curso
            || self.trabajo_curso
            || self.trabajo_control
            || self.otra_forma
    }
}

/// Documento completo ensamblado a partir de una planilla.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentoPlan {
    pub semestres: Vec<Semestre>,
    pub capitulos: Vec<Capitulo>,
}

impl DocumentoPlan {
    /// Resumen legible del documento (conteos por nivel).
    pub fn resumen(&self) -> String {
        let ciclos: usize = self.capitulos.iter().map(|c| c.ciclos.len()).sum();
        let modulos: usize = self
            .capitulos
            .iter()
            .flat_map(|c| c.ciclos.iter())
            .map(|c| c.modulos.len())
            .sum();
        let asignaturas: usize = self
            .capitulos
            .iter()
            .flat_map(|c| c.ciclos.iter())
            .map(|c| {
                c.asignaturas.len()
                    + c.modulos.iter().map(|m| m.asignaturas.len()).sum::<usize>()
            })
            .sum();
        format!(
            "PLAN: {} semestres | {} capitulos | {} ciclos | {} modulos | {} asignaturas",
            self.semestres.len(),
            self.capitulos.len(),
            ciclos,
            modulos,
            asignaturas
        )
    }
}

/// Conjuntos de códigos cortos que clasifican las filas de la planilla.
/// Inmutable una vez construido; pasar por referencia al parser permite
/// correr varias taxonomías institucionales en paralelo.
#[derive(Debug, Clone)]
pub struct CodigosCategoria {
    pub capitulos: HashSet<String>,
    pub ciclos: HashSet<String>,
    pub modulos: HashSet<String>,
    /// Columna (0-based) donde viven los códigos; el nombre legible está en
    /// la columna siguiente.
    pub columna_categoria: usize,
}

impl CodigosCategoria {
    pub fn nuevo(
        capitulos: &[&str],
        ciclos: &[&str],
        modulos: &[&str],
        columna_categoria: usize,
    ) -> Self {
        let a_set = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect();
        CodigosCategoria {
            capitulos: a_set(capitulos),
            ciclos: a_set(ciclos),
            modulos: a_set(modulos),
            columna_categoria,
        }
    }
}

impl Default for CodigosCategoria {
    /// Taxonomía por defecto: formación general/básica/profesional como
    /// capítulos, ciclos CG/CB/CE/CP, módulos M1..M9 y MOD.
    fn default() -> Self {
        CodigosCategoria::nuevo(
            &["FG", "FB", "FP"],
            &["CG", "CB", "CE", "CP"],
            &["MOD", "M1", "M2", "M3", "M4", "M5", "M6", "M7", "M8", "M9"],
            1,
        )
    }
}
