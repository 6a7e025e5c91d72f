//! Embedded Tera templates.
//!
//! Templates are compiled into the binary with `include_str!`, so the
//! server does not depend on the working directory at runtime.

use tera::Tera;

pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        (
            "blog_detail.html",
            include_str!("../templates/blog_detail.html"),
        ),
        ("new_blog.html", include_str!("../templates/new_blog.html")),
        (
            "edit_blog.html",
            include_str!("../templates/edit_blog.html"),
        ),
    ])?;
    Ok(tera)
}
