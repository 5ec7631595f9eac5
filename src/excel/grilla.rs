use std::fmt;

/// Celda de la planilla ya materializada en memoria. Variante cerrada:
/// todo chequeo de tipo de celda pasa por acá y no por checks ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub enum Celda {
    Vacia,
    Numero(f64),
    Texto(String),
}

impl Celda {
    pub fn es_vacia(&self) -> bool {
        match self {
            Celda::Vacia => true,
            Celda::Texto(s) => s.trim().is_empty(),
            Celda::Numero(_) => false,
        }
    }

    /// Representación textual de la celda. Los números enteros se muestran
    /// sin decimales ("16" y no "16.0") para que coincidan con lo que el
    /// autor de la planilla escribió.
    pub fn texto(&self) -> String {
        match self {
            Celda::Vacia => String::new(),
            Celda::Texto(s) => s.trim().to_string(),
            Celda::Numero(f) => {
                if (f.floor() - f).abs() < f64::EPSILON {
                    format!("{}", *f as i64)
                } else {
                    format!("{}", f)
                }
            }
        }
    }

    /// Coerción numérica total: celda numérica → su valor; celda textual →
    /// valor sólo si el texto es puramente numérico (dígitos, `.` y `-`);
    /// cualquier otra cosa (incluida la celda ausente) → 0.
    pub fn numero(&self) -> f64 {
        match self {
            Celda::Numero(f) => *f,
            Celda::Texto(s) => {
                let t = s.trim();
                if !t.is_empty()
                    && t.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
                {
                    t.parse::<f64>().unwrap_or(0.0)
                } else {
                    0.0
                }
            }
            Celda::Vacia => 0.0,
        }
    }
}

impl fmt::Display for Celda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texto())
    }
}

static CELDA_VACIA: Celda = Celda::Vacia;

/// Matriz 2D de celdas en orden fila-mayor. Inmutable una vez construida;
/// las lecturas fuera de rango devuelven la celda vacía en vez de fallar.
#[derive(Debug, Clone)]
pub struct Grilla {
    filas: Vec<Vec<Celda>>,
}

impl Grilla {
    pub fn desde_filas(filas: Vec<Vec<Celda>>) -> Self {
        Grilla { filas }
    }

    pub fn vacia() -> Self {
        Grilla { filas: Vec::new() }
    }

    pub fn alto(&self) -> usize {
        self.filas.len()
    }

    pub fn celda(&self, fila: usize, columna: usize) -> &Celda {
        self.filas
            .get(fila)
            .and_then(|f| f.get(columna))
            .unwrap_or(&CELDA_VACIA)
    }

    pub fn fila(&self, fila: usize) -> &[Celda] {
        self.filas.get(fila).map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Recorre todas las celdas en orden fila-mayor.
    pub fn celdas(&self) -> impl Iterator<Item = (usize, usize, &Celda)> {
        self.filas
            .iter()
            .enumerate()
            .flat_map(|(f, fila)| fila.iter().enumerate().map(move |(c, celda)| (f, c, celda)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numero_celda_textual() {
        assert_eq!(Celda::Texto("36".to_string()).numero(), 36.0);
        assert_eq!(Celda::Texto("1.5".to_string()).numero(), 1.5);
        assert_eq!(Celda::Texto("-2".to_string()).numero(), -2.0);
        // texto mixto no es numérico
        assert_eq!(Celda::Texto("36 hrs".to_string()).numero(), 0.0);
        assert_eq!(Celda::Texto("".to_string()).numero(), 0.0);
        assert_eq!(Celda::Vacia.numero(), 0.0);
        assert_eq!(Celda::Numero(4.25).numero(), 4.25);
    }

    #[test]
    fn test_texto_numero_entero_sin_decimales() {
        assert_eq!(Celda::Numero(16.0).texto(), "16");
        assert_eq!(Celda::Numero(2.5).texto(), "2.5");
    }

    #[test]
    fn test_lectura_fuera_de_rango() {
        let g = Grilla::desde_filas(vec![vec![Celda::Numero(1.0)]]);
        assert_eq!(*g.celda(0, 0), Celda::Numero(1.0));
        assert_eq!(*g.celda(5, 9), Celda::Vacia);
        assert_eq!(*g.celda(0, 3), Celda::Vacia);
    }
}
