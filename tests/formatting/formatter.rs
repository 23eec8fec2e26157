#[cfg(test)]
mod verify {
    use ingredients::formatting::*;
    use ingredients::language::MAX_DEPTH;
    use ingredients::output::*;
    use ingredients::parsing::*;
    use ingredients::rendering::render;
    use ingredients::scaling::*;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail
    }

    fn combine(fragments: Vec<(Syntax, String)>) -> String {
        let mut result = String::new();
        for fragment in fragments {
            result.push_str(&fragment.1);
        }
        result
    }

    fn page(content: &str) -> Page {
        let mut sequence = Sequence::new();
        let outputs = parse_page(&Keywords::default(), content)
            .iter()
            .map(|recipe| recipe.to_output(&mut sequence))
            .collect();
        Page::new(outputs)
    }

    #[test]
    fn nested_recipe() {
        let page = page("overall 4 people\n* 400 g dough\n** 250 g flour\n** 150 ml water\n* 5 ml oil");

        assert_eq!(
            combine(format_output(&page.outputs()[0])),
            trim(
                r#"
* 400 g. dough
  * 250 g. flour
  * 150 ml. water
* 5 ml. oil
For a total of 4 people, 405 -
                "#
            )
        );
    }

    #[test]
    fn variants_and_warnings() {
        let page = page(
            "overall cake\nvariant plain\n* 200 g flour\nvariant rich\n* 200 g flour\n* 100 g butter\nvariant plain",
        );

        assert_eq!(
            render(&Identity, page.outputs()),
            trim(
                r#"
warning: duplicate variant "plain"
Variants: plain, rich
plain:
* 200 g. flour
For a total of 200 g. of cake
                "#
            )
        );
    }

    #[test]
    fn after_selecting_and_scaling() {
        let mut page = page("overall cake\nvariant plain\n* 200 g flour\nvariant rich\n* 200 g flour\n* 100 g butter");

        page.select_variant("cake", 1, "rich")
            .unwrap();
        page.set_total("cake", 1, 600.0)
            .unwrap();

        assert_eq!(
            render(&Identity, page.outputs()),
            trim(
                r#"
Variants: plain, rich
rich:
* 400 g. flour
* 200 g. butter
For a total of 600 g. of cake
                "#
            )
        );
    }

    #[test]
    fn placeholders_shown() {
        let page = page("** 100 g sugar\n**** 50 g water");

        assert_eq!(
            combine(format_page(page.outputs())),
            trim(
                r#"
* ??
  * 100 g. sugar
    * ??
      * 50 g. water
For a total of 100 g.
                "#
            )
        );
    }

    #[test]
    fn deep_nesting_renders() {
        let deepest = format!("{} 5 g salt", "*".repeat(MAX_DEPTH));
        let page = page(&deepest);

        let result = render(&Identity, page.outputs());
        let last = format!("{}* 5 g. salt\n", " ".repeat(2 * (MAX_DEPTH - 1)));
        assert!(result.contains(&last));
        assert!(result.ends_with("For a total of 5 g.\n"));
    }

    #[test]
    fn absurd_nesting_is_a_warning() {
        let line = format!("{} 5 g salt\n* 100 g sugar", "*".repeat(20000));
        let page = page(&line);

        let output = &page.outputs()[0];
        assert_eq!(
            output.errors,
            vec!["ingredient \"salt\" at level 20000".to_string()]
        );
        assert_eq!(
            render(&Identity, page.outputs()),
            trim(
                r#"
warning: ingredient "salt" at level 20000
* 100 g. sugar
For a total of 100 g.
                "#
            )
        );
    }
}
