use catalog::{
    SNAPSHOT_PATH,
    models::{CatalogItem, ItemId},
    snapshot::{Snapshot, TableRecord},
    variants::group_by_base_name,
    write_snapshot,
};

fn main() {
    let ortopedia = vec![
        CatalogItem::new(ItemId::Int(1), "Afastador Hohmann Nº1").with_code("AH1"),
        CatalogItem::new(ItemId::Int(2), "Afastador Hohmann Nº2").with_code("AH2"),
        CatalogItem::new(ItemId::Int(3), "AFASTADOR HOHMANN Nº3").with_code("-"),
        CatalogItem::new(ItemId::Int(4), "ASS185 - Cureta 18mm x 50mm")
            .with_image("ortopedia/cureta 50.png"),
        CatalogItem::new(ItemId::Int(5), "ASS186 - Cureta 18mm x 70mm"),
        CatalogItem::new(ItemId::Int(6), "Pinça Kerrison 2"),
        CatalogItem::new(ItemId::Int(7), "Pinça Kerrison 3"),
        CatalogItem::new(ItemId::Int(8), "Afastador Abdominal All Path"),
    ];

    let hospitalar = vec![
        CatalogItem::new(ItemId::Text("mh-01".into()), "Maca Hospitalar")
            .with_image("https://images.example.com/maca.png"),
        CatalogItem::new(ItemId::Text("cr-01".into()), "Cadeira de Rodas #1"),
        CatalogItem::new(ItemId::Text("cr-02".into()), "Cadeira de Rodas #2"),
        CatalogItem::new(ItemId::Text("mo-01".into()), "Monitor Multiparamétrico Dixtal 2020"),
    ];

    for (name, items) in [("caixa_ortopedia", &ortopedia), ("hospitalar", &hospitalar)] {
        let groups = group_by_base_name(items);

        println!("{name}: {} items in {} groups", items.len(), groups.len());
        for group in groups {
            println!(
                "  {} x{} ({:?}..{:?})",
                group.base_name,
                group.members.len(),
                group.first_number,
                group.last_number
            );
        }
    }

    let snapshot = Snapshot {
        generated_at: "2026-01-01T00:00:00Z".to_string(),
        tables: vec![
            TableRecord::new("caixa_ortopedia", "Caixa de Ortopedia", &ortopedia),
            TableRecord::new("hospitalar", "Equipamentos Hospitalares", &hospitalar),
        ],
    };

    write_snapshot(SNAPSHOT_PATH, &snapshot).unwrap();
}
