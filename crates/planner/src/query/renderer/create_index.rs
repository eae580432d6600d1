use crate::query::{
    ast::create_index::CreateIndex,
    renderer::{Render, Renderer},
};

impl Render for CreateIndex {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE INDEX ");
        r.sql.push_str(&self.name);
        r.sql.push_str(" ON ");
        r.render_table_ref(&self.table);
        r.sql.push('(');
        r.push_quoted(&self.column);
        r.sql.push_str(");");
    }
}
