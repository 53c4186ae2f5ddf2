use maud::{html, Markup};

pub(crate) mod posts;

pub fn head() -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { "Posts" }
        link rel="stylesheet" href="/styles/site.css" {}
      }
    }
}

pub fn header() -> Markup {
    html! {
      nav class="site-nav" {
        ul {
          li {
            a href="/posts" { "Posts" }
          }
        }
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (head())

      body {
        (header())

        main { (inner) }
      }
    }
}
