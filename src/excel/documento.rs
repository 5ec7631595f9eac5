//! Ensamblado del documento final: estructura + semestres + horas +
//! certificaciones, ids sintéticos secuenciales y sanitización de flotantes
//! no finitos antes de serializar.

use crate::excel::certificaciones::extraer_certificaciones;
use crate::excel::estructura::parsear_estructura;
use crate::excel::grilla::Grilla;
use crate::excel::horas::{IndiceFilas, extraer_horas};
use crate::excel::semestres::{ColumnaSemestre, localizar_columnas_semestre, localizar_semestres};
use crate::models::{Asignatura, CodigosCategoria, DocumentoPlan};

#[derive(Default)]
struct Contadores {
    capitulos: i32,
    ciclos: i32,
    modulos: i32,
    asignaturas: i32,
}

/// Punto de entrada del núcleo: función pura y determinista de
/// (grilla, códigos) al documento ensamblado y sanitizado.
pub fn parsear_plan(grilla: &Grilla, codigos: &CodigosCategoria) -> DocumentoPlan {
    let semestres = localizar_semestres(grilla);
    let columnas = localizar_columnas_semestre(grilla);
    let mut capitulos = parsear_estructura(grilla, codigos);
    let indice = IndiceFilas::construir(grilla, codigos);

    // Recorrido en profundidad con cuatro contadores 1-based independientes,
    // uno por nivel, en orden de visita.
    let mut contadores = Contadores::default();
    for capitulo in capitulos.iter_mut() {
        contadores.capitulos += 1;
        capitulo.id = contadores.capitulos;
        for ciclo in capitulo.ciclos.iter_mut() {
            contadores.ciclos += 1;
            ciclo.id = contadores.ciclos;
            ciclo.tiene_modulos = !ciclo.modulos.is_empty();
            for modulo in ciclo.modulos.iter_mut() {
                contadores.modulos += 1;
                modulo.id = contadores.modulos;
                for asignatura in modulo.asignaturas.iter_mut() {
                    contadores.asignaturas += 1;
                    asignatura.id = contadores.asignaturas;
                    asignatura.id_modulo = Some(modulo.id);
                    asignatura.id_ciclo = None;
                    completar_asignatura(asignatura, grilla, &indice, &columnas, codigos);
                }
            }
            for asignatura in ciclo.asignaturas.iter_mut() {
                contadores.asignaturas += 1;
                asignatura.id = contadores.asignaturas;
                asignatura.id_ciclo = Some(ciclo.id);
                asignatura.id_modulo = None;
                completar_asignatura(asignatura, grilla, &indice, &columnas, codigos);
            }
        }
    }

    let mut documento = DocumentoPlan {
        semestres,
        capitulos,
    };
    sanitizar_documento(&mut documento);
    documento
}

fn completar_asignatura(
    asignatura: &mut Asignatura,
    grilla: &Grilla,
    indice: &IndiceFilas,
    columnas: &[ColumnaSemestre],
    codigos: &CodigosCategoria,
) {
    asignatura.horas = extraer_horas(
        grilla,
        indice,
        columnas,
        &asignatura.codigo,
        &asignatura.nombre,
    );
    asignatura.certificaciones = extraer_certificaciones(
        grilla,
        indice,
        codigos,
        &asignatura.codigo,
        &asignatura.nombre,
    );
}

fn limpiar(valor: &mut Option<f64>) {
    *valor = valor.filter(|v| v.is_finite());
}

/// Reemplaza todo flotante no finito (NaN, ±∞) por el marcador de ausencia,
/// para que el documento siempre serialice de forma segura.
pub fn sanitizar_documento(documento: &mut DocumentoPlan) {
    for semestre in documento.semestres.iter_mut() {
        limpiar(&mut semestre.semanas);
        limpiar(&mut semestre.semanas_practica);
    }
    for capitulo in documento.capitulos.iter_mut() {
        for ciclo in capitulo.ciclos.iter_mut() {
            for modulo in ciclo.modulos.iter_mut() {
                for asignatura in modulo.asignaturas.iter_mut() {
                    sanitizar_asignatura(asignatura);
                }
            }
            for asignatura in ciclo.asignaturas.iter_mut() {
                sanitizar_asignatura(asignatura);
            }
        }
    }
}

fn sanitizar_asignatura(asignatura: &mut Asignatura) {
    for horas in asignatura.horas.iter_mut() {
        limpiar(&mut horas.horas_autonomas);
        limpiar(&mut horas.horas_catedra);
        limpiar(&mut horas.horas_practicas);
        limpiar(&mut horas.horas_laboratorio);
        limpiar(&mut horas.horas_evaluacion_intermedia);
        limpiar(&mut horas.horas_proyecto_curso);
        limpiar(&mut horas.horas_consulta);
        limpiar(&mut horas.horas_certificacion);
    }
}

/// Documento como JSON listo para entregar al colaborador de persistencia.
pub fn documento_a_json(documento: &DocumentoPlan) -> serde_json::Value {
    serde_json::to_value(documento).unwrap_or(serde_json::Value::Null)
}
