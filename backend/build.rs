use std::fs;
use std::path::Path;

// Copies the trunk build of the frontend into `static/dist` so it can be
// embedded with `include_dir!`. The directory always exists, even when the
// frontend has not been built.
fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static/dist");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .expect("copy frontend dist");
    } else {
        fs::create_dir_all(out_dir).expect("create static/dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
