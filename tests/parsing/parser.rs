#[cfg(test)]
mod verify {
    use ingredients::language::*;
    use ingredients::parsing::*;

    fn trim(text: &str) -> &str {
        text.trim_start_matches('\n')
    }

    fn unnamed(recipe: &Recipe) -> &IngredientList {
        recipe
            .variant(&Variant::Unnamed)
            .expect("no unnamed variant")
    }

    #[test]
    fn gaps_are_bridged() {
        let recipe = parse(&Keywords::default(), "** 100 g sugar\n**** 50 ml water");
        let root = unnamed(&recipe);

        assert_eq!(root.level(), 1);
        assert!(root.items()[0].is_placeholder());

        let sugar = &root.items()[0]
            .nested()
            .unwrap()
            .items()[0];
        assert_eq!(sugar.description, "sugar");

        let three = sugar
            .nested()
            .unwrap();
        assert_eq!(three.level(), 3);
        assert_eq!(
            three
                .items()
                .len(),
            1
        );
        assert!(three.items()[0].is_placeholder());

        let four = three.items()[0]
            .nested()
            .unwrap();
        assert_eq!(four.level(), 4);
        assert_eq!(four.items()[0].description, "water");
    }

    #[test]
    fn gap_after_real_ingredient() {
        let recipe = parse(&Keywords::default(), "* 200 g flour\n*** 5 g yeast");
        let root = unnamed(&recipe);

        let flour = &root.items()[0];
        let two = flour
            .nested()
            .unwrap();
        assert_eq!(
            two.items()
                .len(),
            1
        );
        assert!(two.items()[0].is_placeholder());

        let three = two.items()[0]
            .nested()
            .unwrap();
        assert_eq!(three.items()[0].description, "yeast");

        // the placeholder carries the yeast up to the flour, which has its
        // own amount
        assert_eq!(
            root.compute_total_weight()
                .amount,
            Amount::Given(200.0)
        );
    }

    #[test]
    fn indentation_and_stars_agree() {
        let indented = parse(
            &Keywords::default(),
            trim(
                r#"
  * 400 g dough
    * 250 g flour
    * 150 ml water
  * 5 ml oil
                "#,
            ),
        );
        let starred = parse(
            &Keywords::default(),
            "* 400 g dough\n** 250 g flour\n** 150 ml water\n* 5 ml oil",
        );

        assert_eq!(unnamed(&indented), unnamed(&starred));
    }

    #[test]
    fn totals() {
        let recipe = parse(&Keywords::default(), "* 200 g flour\n* 3 eggs");
        let weight = unnamed(&recipe).compute_total_weight();
        assert_eq!(weight.amount, Amount::Given(203.0));
        assert_eq!(weight.unit, Unit::Symbol("g.".to_string()));

        let recipe = parse(&Keywords::default(), "* 200 g flour\n* 100 ml milk");
        let weight = unnamed(&recipe).compute_total_weight();
        assert_eq!(weight.amount, Amount::Given(300.0));
        assert_eq!(weight.unit, Unit::Mixed);

        let recipe = parse(&Keywords::default(), "* 0 g flour\n* 100 g sugar");
        let weight = unnamed(&recipe).compute_total_weight();
        assert_eq!(weight, Weight::zero());
    }

    #[test]
    fn nested_totals() {
        let recipe = parse(
            &Keywords::default(),
            "* topping\n** 200 g sauce\n** 150 g cheese\n* 400 g dough",
        );
        let weight = unnamed(&recipe).compute_total_weight();
        assert_eq!(weight.amount, Amount::Given(750.0));
    }

    #[test]
    fn directives_mixed_with_ingredients() {
        let recipe = parse(
            &Keywords::default(),
            trim(
                r#"
overall 6 people
variant plain
  * 200 g flour
variant rich
  * 200 g flour
  * 100 g butter
command "people" variant rich
                "#,
            ),
        );

        assert!(recipe
            .errors()
            .is_empty());
        assert_eq!(recipe.names(), vec!["people".to_string()]);
        assert_eq!(
            recipe
                .variants()
                .count(),
            2
        );
        assert_eq!(
            recipe.commands()[0].action,
            Action::SelectVariant("rich".to_string())
        );
    }

    #[test]
    fn problems_are_collected() {
        let recipe = parse(
            &Keywords::default(),
            trim(
                r#"
variant plain
* 200 g flour
variant plain
overall 6 people
command "cake" bake 20
* 100 g sugar
                "#,
            ),
        );

        let messages: Vec<String> = recipe
            .errors()
            .iter()
            .map(|error| error.to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "duplicate variant \"plain\"".to_string(),
                "overall quantity \"6 people\" declared after variants and/or ingredients"
                    .to_string(),
                "invalid command \"bake 20\" for \"cake\" (#1)".to_string(),
            ]
        );

        // everything still landed in the one variant
        let plain = recipe
            .variant(&Variant::Named("plain".to_string()))
            .unwrap();
        assert_eq!(
            plain
                .items()
                .len(),
            2
        );
    }
}
