use std::env;
use std::fs;
use std::path::Path;

// Prefijo de las variables que lee src/config.rs con option_env!
const CONFIG_PREFIX: &str = "ROUTER_";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        // Sin .env se usan los valores por defecto de RouterConfig
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !key.starts_with(CONFIG_PREFIX) {
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// Parsear una línea KEY=VALUE (ignora comentarios, líneas vacías y comillas)
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}
