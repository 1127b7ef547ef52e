/**
 * CSS Shield - css-shield
 *
 * Shields template_base/style.css into template_base/style-wp.css
 */
use std::process;

use css_shield::{shield_with_config, ShieldConfig, ShieldOutcome};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("{}", css_shield::version_string());

    let config = ShieldConfig::default();

    match shield_with_config(&config) {
        Ok(ShieldOutcome::Written { output, .. }) => {
            println!(
                "✅ Sucesso! CSS blindado e salvo em '{}'",
                output.display()
            );
        }
        Ok(ShieldOutcome::InputMissing { input }) => {
            println!(
                "❌ Erro: O arquivo de entrada '{}' não foi encontrado.",
                input.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
