use crate::query::{
    ast::create_table::{CheckConstraint, ColumnDef, CreateTable, TableConstraint},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        let num_cols = self.columns.len();
        for (i, col) in self.columns.iter().enumerate() {
            r.sql.push_str("\n\t");
            col.render(r);
            if i < num_cols - 1 || !self.constraints.is_empty() {
                r.sql.push(',');
            }
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            r.sql.push_str("\n\t");
            constraint.render(r);
            if i < self.constraints.len() - 1 {
                r.sql.push(',');
            }
        }

        r.sql.push_str("\n);");
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) {
        // Name and Type
        r.push_quoted(&self.name);
        r.sql.push(' ');
        r.sql.push_str(&r.dialect.render_data_type(&self.data_type));

        if self.is_nullable {
            r.sql.push_str(" NULL");
        } else {
            r.sql.push_str(" NOT NULL");
        }

        if let Some(check) = &self.check {
            r.sql.push(' ');
            check.render(r);
        }
    }
}

impl Render for CheckConstraint {
    fn render(&self, r: &mut Renderer) {
        match self {
            CheckConstraint::InList { column, values } => {
                r.sql.push_str("CHECK(");
                r.push_quoted(column);
                r.sql.push_str(" IN (");
                let list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                r.sql.push_str(&list.join(","));
                r.sql.push_str("))");
            }
        }
    }
}

impl Render for TableConstraint {
    fn render(&self, r: &mut Renderer) {
        let (name, keyword, column) = match self {
            TableConstraint::PrimaryKey { name, column } => (name, "PRIMARY KEY", column),
            TableConstraint::Unique { name, column } => (name, "UNIQUE", column),
        };

        r.sql.push_str("CONSTRAINT ");
        r.sql.push_str(name);
        r.sql.push(' ');
        r.sql.push_str(keyword);
        r.sql.push('(');
        r.push_quoted(column);
        r.sql.push(')');
    }
}
