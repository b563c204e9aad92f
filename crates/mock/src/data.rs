//! Seed records for the mock API
//!
//! Built from wire-literal keys on purpose: the mock carries no serde
//! models, so a field-name drift in the client shows up as a test
//! failure instead of being hidden by shared types.

use serde_json::{json, Value};

pub(crate) fn posts() -> Vec<Value> {
    let titles = [
        "sunt aut facere repellat provident occaecati",
        "qui est esse",
        "ea molestias quasi exercitationem repellat",
        "eum et est occaecati",
        "nesciunt quas odio",
        "dolorem eum magni eos aperiam quia",
        "magnam facilis autem",
        "dolorem dolore est ipsam",
        "nesciunt iure omnis dolorem tempora",
        "optio molestias id quia eum",
        "et ea vero quia laudantium autem",
        "in quibusdam tempore odit est dolorem",
    ];
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let id = (i + 1) as u64;
            json!({
                "userId": (i / 4 + 1) as u64,
                "id": id,
                "title": title,
                "body": format!(
                    "quia et suscipit recusandae consequuntur expedita \
                     post {id} reprehenderit molestiae ut ut quas totam"
                ),
            })
        })
        .collect()
}

pub(crate) fn users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }),
        json!({
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": {"lat": "-43.9509", "lng": "-34.4618"}
            },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": {
                "name": "Deckow-Crist",
                "catchPhrase": "Proactive didactic contingency",
                "bs": "synergize scalable supply-chains"
            }
        }),
        json!({
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "address": {
                "street": "Douglas Extension",
                "suite": "Suite 847",
                "city": "McKenziehaven",
                "zipcode": "59590-4157",
                "geo": {"lat": "-68.6102", "lng": "-47.0653"}
            },
            "phone": "1-463-123-4447",
            "website": "ramiro.info",
            "company": {
                "name": "Romaguera-Jacobson",
                "catchPhrase": "Face to face bifurcated interface",
                "bs": "e-enable strategic applications"
            }
        }),
    ]
}

pub(crate) fn comments() -> Vec<Value> {
    vec![
        json!({
            "postId": 1,
            "id": 1,
            "name": "id labore ex et quam laborum",
            "email": "Eliseo@gardner.biz",
            "body": "laudantium enim quasi est quidem magnam voluptate ipsam eos"
        }),
        json!({
            "postId": 1,
            "id": 2,
            "name": "quo vero reiciendis velit similique earum",
            "email": "Jayne_Kuhic@sydney.com",
            "body": "est natus enim nihil est dolore omnis voluptatem numquam"
        }),
        json!({
            "postId": 1,
            "id": 3,
            "name": "odio adipisci rerum aut animi",
            "email": "Nikita@garfield.biz",
            "body": "quia molestiae reprehenderit quasi aspernatur aut expedita occaecati"
        }),
        json!({
            "postId": 2,
            "id": 4,
            "name": "alias odio sit",
            "email": "Lew@alysha.tv",
            "body": "non et atque occaecati deserunt quas accusantium unde odit"
        }),
        json!({
            "postId": 2,
            "id": 5,
            "name": "vero eaque aliquid doloribus et culpa",
            "email": "Hayden@althea.biz",
            "body": "harum non quasi et ratione tempore iure ex voluptates"
        }),
    ]
}
