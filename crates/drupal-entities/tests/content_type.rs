use drupal_entities::{ContentType, Field, Node, NodeError, TextField};

struct Article {
    node: Node,
    body: TextField,
    summary: TextField,
}

impl Article {
    fn new() -> Self {
        Article {
            node: Node::default(),
            body: TextField::new("field_body"),
            summary: TextField::new("field_summary"),
        }
    }
}

impl ContentType for Article {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn fields(&self) -> Vec<&dyn Field> {
        vec![&self.body as &dyn Field, &self.summary]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn Field> {
        vec![&mut self.body as &mut dyn Field, &mut self.summary]
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const ARTICLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<result>
  <nid>77</nid>
  <title>Field guide</title>
  <type>article</type>
  <status>1</status>
  <field_body>
    <und>
      <item>
        <value>Body text</value>
        <safe_value>&lt;p&gt;Body text&lt;/p&gt;</safe_value>
        <format>filtered_html</format>
      </item>
    </und>
  </field_body>
</result>"#;

#[test]
fn article_parses_node_and_fields() {
    init_tracing();
    let mut article = Article::new();
    article.populate_from_xml(ARTICLE).expect("parse article");

    assert_eq!(article.node().nid(), Some(77));
    assert_eq!(article.node().node_type(), Some("article"));
    assert!(article.body.is_set());
    assert_eq!(article.body.safe_value(), Some("<p>Body text</p>"));
    assert!(!article.summary.is_set());
}

#[test]
fn post_payload_only_contains_set_fields() {
    init_tracing();
    let mut article = Article::new();
    article.populate_from_xml(ARTICLE).expect("parse article");
    assert_eq!(
        article.fields_post_xml(),
        "<item><value>Body text</value></item>"
    );

    article.summary.set_value(Some("Short".into()));
    assert_eq!(
        article.fields_post_xml(),
        "<item><value>Body text</value></item><item><value>Short</value></item>"
    );
}

#[test]
fn empty_content_type_posts_nothing() {
    let article = Article::new();
    assert_eq!(article.fields_post_xml(), "");
}

#[test]
fn invalid_document_leaves_fields_untouched() {
    init_tracing();
    let mut article = Article::new();
    article.body.set_value(Some("draft".into()));
    let err = article
        .populate_from_xml("<result><field_body><value>x</value></field_body></result>")
        .unwrap_err();
    assert!(matches!(err, NodeError::InvalidDocument { .. }));
    assert_eq!(article.body.value(), Some("draft"));
}

#[test]
fn lenient_parsing_keeps_identity_with_bad_auxiliary_fields() {
    init_tracing();
    let xml = r#"<result>
  <nid>8</nid>
  <title>Partial</title>
  <type>page</type>
  <status>true</status>
  <translate>2</translate>
  <comment>abc</comment>
  <created></created>
  <language>  </language>
</result>"#;
    let node = Node::from_xml(xml).expect("identity fields present");
    assert_eq!(node.nid(), Some(8));
    assert_eq!(node.status(), None);
    assert_eq!(node.translate(), None);
    assert_eq!(node.comment(), None);
    assert_eq!(node.created(), None);
    assert_eq!(node.language(), None);
}

#[test]
fn invalid_document_error_carries_raw_xml() {
    let err = Node::from_xml("<result></result>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid node XML: <result></result>"
    );
}

#[test]
fn random_identity_values_parse() {
    for _ in 0..64 {
        let nid = fastrand::i64(0..i64::MAX);
        let vid = fastrand::i64(..);
        let status = fastrand::bool();
        let xml = format!(
            "<result><nid>{nid}</nid><vid>{vid}</vid><title>t</title><type>page</type>\
             <status>{}</status></result>",
            u8::from(status)
        );
        let node = Node::from_xml(&xml).expect("parse node");
        assert_eq!(node.nid(), Some(nid));
        assert_eq!(node.vid(), Some(vid));
        assert_eq!(node.status(), Some(status));
    }
}

#[test]
fn deeply_nested_auxiliary_field_does_not_abort() {
    init_tracing();
    let depth = 50_000;
    let xml = format!(
        "<result><nid>1</nid><title>t</title><type>page</type><log>{}entry{}</log></result>",
        "<a>".repeat(depth),
        "</a>".repeat(depth)
    );
    let node = Node::from_xml(&xml).expect("parse node");
    assert_eq!(node.nid(), Some(1));
    assert_eq!(node.log(), Some("entry"));
}
