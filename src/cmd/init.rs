use anyhow::Result;
use serde_json::json;

use tdeecalc::models::config::Config;
use tdeecalc::output;

pub fn run(force: bool, human: bool) -> Result<()> {
    let path = Config::path();
    let created = force || !path.exists();
    if created {
        Config::default().save()?;
    }

    if human {
        if created {
            println!("Config initialized with defaults at {:?}", path);
        } else {
            println!("Config already exists at {:?} (use --force to overwrite)", path);
        }
    } else {
        let out = output::success(
            "init",
            json!({ "path": path.display().to_string(), "created": created }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
