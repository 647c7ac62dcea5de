use std::fs;
use std::path::Path;

/// Copies the Trunk output of the frontend into `static/dist`, where the host
/// embeds it. Without a fresh build the checked-in placeholder page is kept.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )?;
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
