//! Reconstrucción del árbol capítulo → ciclo → módulo → asignatura a partir
//! de filas planas, sin indentación. La fila se clasifica por pertenencia de
//! su código corto a los conjuntos configurados, con prioridad fija
//! capítulo > ciclo > módulo > asignatura, y se cuelga del último ancestro
//! visto ("actual").

use crate::excel::grilla::Grilla;
use crate::models::{Asignatura, Capitulo, Ciclo, CodigosCategoria, Modulo};

/// Código literal que marca una fila a ignorar.
pub const MARCADOR_IGNORAR: &str = "*";

/// Estado del reductor fila a fila: el acumulado de capítulos más los
/// índices del capítulo/ciclo/módulo actuales. Una transición por fila, de
/// arriba hacia abajo.
#[derive(Debug, Default)]
pub struct EstadoEstructura {
    pub capitulos: Vec<Capitulo>,
    capitulo_actual: Option<usize>,
    ciclo_actual: Option<usize>,
    modulo_actual: Option<usize>,
}

impl EstadoEstructura {
    /// Aplica una fila (código de categoría + nombre legible) al estado.
    /// Una fila sin nombre igual produce su nodo, con nombre vacío.
    pub fn procesar_fila(&mut self, codigo: &str, nombre: &str, codigos: &CodigosCategoria) {
        if codigos.capitulos.contains(codigo) {
            self.capitulos.push(Capitulo {
                id: 0,
                codigo: codigo.to_string(),
                nombre: nombre.to_string(),
                ciclos: Vec::new(),
            });
            self.capitulo_actual = Some(self.capitulos.len() - 1);
            self.ciclo_actual = None;
            self.modulo_actual = None;
        } else if codigos.ciclos.contains(codigo) {
            match self.capitulo_actual {
                Some(cap) => {
                    let ciclos = &mut self.capitulos[cap].ciclos;
                    ciclos.push(Ciclo {
                        id: 0,
                        codigo: codigo.to_string(),
                        nombre: nombre.to_string(),
                        tiene_modulos: false,
                        modulos: Vec::new(),
                        asignaturas: Vec::new(),
                    });
                    self.ciclo_actual = Some(ciclos.len() - 1);
                    self.modulo_actual = None;
                }
                None => {
                    eprintln!("DEBUG: ciclo '{}' sin capitulo previo, fila descartada", codigo);
                }
            }
        } else if codigos.modulos.contains(codigo) {
            match (self.capitulo_actual, self.ciclo_actual) {
                (Some(cap), Some(cic)) => {
                    let modulos = &mut self.capitulos[cap].ciclos[cic].modulos;
                    modulos.push(Modulo {
                        id: 0,
                        codigo: codigo.to_string(),
                        nombre: nombre.to_string(),
                        asignaturas: Vec::new(),
                    });
                    self.modulo_actual = Some(modulos.len() - 1);
                }
                _ => {
                    eprintln!("DEBUG: modulo '{}' sin ciclo previo, fila descartada", codigo);
                }
            }
        } else if codigo != MARCADOR_IGNORAR {
            let asignatura = Asignatura {
                id: 0,
                codigo: codigo.to_string(),
                nombre: nombre.to_string(),
                id_ciclo: None,
                id_modulo: None,
                horas: Vec::new(),
                certificaciones: Vec::new(),
            };
            match (self.capitulo_actual, self.ciclo_actual) {
                (Some(cap), Some(cic)) => {
                    let ciclo = &mut self.capitulos[cap].ciclos[cic];
                    match self.modulo_actual {
                        Some(m) => ciclo.modulos[m].asignaturas.push(asignatura),
                        None => ciclo.asignaturas.push(asignatura),
                    }
                }
                _ => {
                    eprintln!(
                        "DEBUG: asignatura '{}' sin ciclo ni modulo, fila descartada",
                        codigo
                    );
                }
            }
        }
    }
}

/// Recorre la grilla de arriba hacia abajo y clasifica toda fila con código
/// de categoría no vacío. El nombre legible es la columna adyacente.
pub fn parsear_estructura(grilla: &Grilla, codigos: &CodigosCategoria) -> Vec<Capitulo> {
    let mut estado = EstadoEstructura::default();
    for fila in 0..grilla.alto() {
        let codigo = grilla.celda(fila, codigos.columna_categoria).texto();
        if codigo.is_empty() {
            continue;
        }
        let nombre = grilla.celda(fila, codigos.columna_categoria + 1).texto();
        estado.procesar_fila(&codigo, &nombre, codigos);
    }
    estado.capitulos
}
