//! Decodificación del texto compuesto de "semanas" de un semestre.
//!
//! El autor de la planilla escribe cosas como `"16"`, `"14 2/7"` o
//! `"10(2)"`: un entero de semanas lectivas, opcionalmente una fracción de
//! semana y, entre paréntesis, las semanas de práctica.

/// Decodifica el texto de semanas a `(semanas, semanas_practica)`.
/// Ningún fragmento ilegible hace fallar la lectura: cada parte que no se
/// pueda interpretar aporta 0 a su casilla.
pub fn decodificar_semanas(texto: &str) -> (f64, f64) {
    let t = texto.trim();
    let mut semanas = 0.0;
    let mut practica = 0.0;

    // Fracción N/D en cualquier posición. La división se hace tal cual está
    // escrita; un denominador 0 produce un infinito que elimina después la
    // sanitización del documento.
    if let Some(pos) = t.find('/') {
        let num: String = t[..pos]
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .chars()
            .rev()
            .collect();
        let den: String = t[pos + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let (Ok(n), Ok(d)) = (num.parse::<f64>(), den.parse::<f64>()) {
            semanas = n / d;
        }
    }

    // Grupo entre paréntesis: semanas de práctica
    if let Some(ini) = t.find('(') {
        if let Some(fin) = t[ini + 1..].find(')') {
            let interior = &t[ini + 1..ini + 1 + fin];
            let limpio: String = interior
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            practica = limpio.parse::<f64>().unwrap_or(0.0);
        }
    }

    // Entero inicial: se suma a lo que haya aportado la fracción
    let inicial: String = t.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !inicial.is_empty() {
        semanas += inicial.parse::<f64>().unwrap_or(0.0);
    }

    (semanas, practica)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entero_simple() {
        assert_eq!(decodificar_semanas("16"), (16.0, 0.0));
    }

    #[test]
    fn test_entero_con_fraccion() {
        let (semanas, practica) = decodificar_semanas("14 2/7");
        assert!((semanas - (14.0 + 2.0 / 7.0)).abs() < 1e-9);
        assert_eq!(practica, 0.0);
    }

    #[test]
    fn test_practica_entre_parentesis() {
        assert_eq!(decodificar_semanas("10(2)"), (10.0, 2.0));
        assert_eq!(decodificar_semanas("12 (1.5)"), (12.0, 1.5));
    }

    #[test]
    fn test_vacio_y_basura() {
        assert_eq!(decodificar_semanas(""), (0.0, 0.0));
        assert_eq!(decodificar_semanas("sin datos"), (0.0, 0.0));
        assert_eq!(decodificar_semanas("(x)"), (0.0, 0.0));
    }

    #[test]
    fn test_denominador_cero_produce_infinito() {
        // el valor queda no finito acá; lo remueve la sanitización del documento
        let (semanas, _) = decodificar_semanas("3/0");
        assert!(semanas.is_infinite());
    }
}
