use crate::api::models::User;
use crate::storage::ContactStore;

pub fn render(user: &User, store: &ContactStore) -> String {
    let tree = store.network_tree();
    let mut lines = super::heading("Network Tree");
    lines.push(format!("{} (You) - {} direct contacts", user.name, tree.len()));
    for (i, node) in tree.iter().enumerate() {
        let last = i + 1 == tree.len();
        let (branch, indent) = if last { ("`--", "    ") } else { ("|--", "|   ") };
        lines.push(format!(
            "{branch} {} [{}, {}] network {}",
            node.contact.name,
            node.contact.relationship,
            node.contact.support,
            node.contact.network_size
        ));
        for (j, child) in node.children.iter().enumerate() {
            let leaf = if j + 1 == node.children.len() { "`--" } else { "|--" };
            lines.push(format!("{indent}{leaf} {} [{}]", child.name, child.relationship));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}
