//! HTML rendering of the records page.

use std::{io, path::Path};

use minijinja::{Environment, context};

use crate::{
    redirect::browser_adapter_script,
    sort::{SORT_METHOD_PARAM, RecordOrder, sort_options},
    types::BookEntry,
};

pub const TEMPLATE_NAME: &str = "results.html";
const TEMPLATE: &str = include_str!("../templates/results.html");

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders `records` as given, with `order`'s option selected in the
    /// sort dropdown. Records are expected to be ordered already.
    pub fn render(
        &self,
        records: &[BookEntry],
        order: RecordOrder,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render(context! {
            bib_results => records,
            sort_options => sort_options(order),
            control_id => SORT_METHOD_PARAM,
            redirect_script => browser_adapter_script(SORT_METHOD_PARAM),
        })
    }
}

/// Writes a rendered page to `path`, creating parent directories.
pub async fn write_snapshot(path: &Path, html: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, html).await
}
