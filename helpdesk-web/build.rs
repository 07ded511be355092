use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css` when the Tailwind CLI is
/// installed. Without it an empty stylesheet keeps `asset!` resolvable.
fn generate_tailwind() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let tailwind_input = manifest_dir.join("tailwind.css");
    let tailwind_output = manifest_dir.join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("../helpdesk-ui/src").display()
    );

    let tailwind_bin = manifest_dir.join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed; run `npm install` in helpdesk-web");
        if !tailwind_output.exists() {
            if let Err(e) = std::fs::write(&tailwind_output, "") {
                println!("cargo:warning=Failed to create placeholder stylesheet: {e}");
            }
        }
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Tailwind CSS generation failed");
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                println!("cargo:warning={line}");
            }
        }
        Err(e) => println!("cargo:warning=Failed to run tailwindcss: {e}"),
    }
}
