//! Built-in sample data from the classic composite illustration.

use crate::domain::{Directory, DomainResult, Employee, OrgTree};

/// The sample org chart: a CEO over two department heads, each
/// with two reports.
pub fn sample_tree() -> DomainResult<OrgTree> {
    let mut tree = OrgTree::new();

    let ceo = tree.insert_node(Employee::new("John", "CEO", 30000), None)?;
    let head_sales = tree.add_subordinate(ceo, Employee::new("Robert", "Head Sales", 20000))?;
    let head_marketing =
        tree.add_subordinate(ceo, Employee::new("Michel", "Head Marketing", 20000))?;

    tree.add_subordinate(head_sales, Employee::new("Richard", "Sales", 10000))?;
    tree.add_subordinate(head_sales, Employee::new("Rob", "Sales", 10000))?;

    tree.add_subordinate(head_marketing, Employee::new("Laura", "Marketing", 10000))?;
    tree.add_subordinate(head_marketing, Employee::new("Bob", "Marketing", 10000))?;

    Ok(tree)
}

/// Sample company directory: the sample chart plus the
/// engineering directory with its two standalone developers.
pub fn sample_directory() -> DomainResult<Directory> {
    let mut directory = Directory::new();
    directory.push(sample_tree()?);

    let mut dev1 = OrgTree::new();
    dev1.insert_node(Employee::new("Lokesh Sharma", "Pro Developer", 15000), None)?;
    directory.push(dev1);

    let mut dev2 = OrgTree::new();
    dev2.insert_node(Employee::new("Vinay Sharma", "Developer", 12000), None)?;
    directory.push(dev2);

    Ok(directory)
}
