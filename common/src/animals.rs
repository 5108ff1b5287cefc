use std::{fmt, str::FromStr};

// static catalog behind the /animals/:animal pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimalKey {
    Cat,
    Dog,
    Elephant,
}

impl AnimalKey {
    pub const ALL: [AnimalKey; 3] = [AnimalKey::Cat, AnimalKey::Dog, AnimalKey::Elephant];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalKey::Cat => "cat",
            AnimalKey::Dog => "dog",
            AnimalKey::Elephant => "elephant",
        }
    }

    pub fn info(&self) -> &'static AnimalInfo {
        match self {
            AnimalKey::Cat => &CAT,
            AnimalKey::Dog => &DOG,
            AnimalKey::Elephant => &ELEPHANT,
        }
    }
}

impl fmt::Display for AnimalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// route parameters are matched exactly, so /animals/Cat is a 404 just like
// any other unknown key
impl FromStr for AnimalKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimalKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown animal: {s}"))
    }
}

pub fn lookup(animal: &str) -> Option<&'static AnimalInfo> {
    animal.parse::<AnimalKey>().ok().map(|key| key.info())
}

#[derive(Debug, PartialEq)]
pub struct AnimalInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub facts: &'static [Fact],
    pub photos: &'static [BentoItem],
}

#[derive(Debug, PartialEq)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

// one tile of the bento grid, which is six columns wide with fixed-height rows
#[derive(Debug, PartialEq)]
pub struct BentoItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub span_col: Option<u8>,
    pub span_row: Option<u8>,
    pub width: u32,
    pub height: u32,
}

pub const GRID_COLUMNS: u8 = 6;
pub const GRID_MAX_ROWS: u8 = 4;

impl BentoItem {
    // out of range spans snap back to the defaults instead of being clamped,
    // so a typo in the table can't produce a tile wider than the grid
    pub fn span(&self) -> (u8, u8) {
        let col = self
            .span_col
            .filter(|c| (1..=GRID_COLUMNS).contains(c))
            .unwrap_or(2);
        let row = self
            .span_row
            .filter(|r| (1..=GRID_MAX_ROWS).contains(r))
            .unwrap_or(1);

        (col, row)
    }

    pub fn grid_style(&self) -> String {
        let (col, row) = self.span();
        format!("grid-column: span {col}; grid-row: span {row};")
    }
}

macro_rules! fact {
    ($label:expr, $value:expr) => {
        Fact {
            label: $label,
            value: $value,
        }
    };
}

macro_rules! photo {
    ($src:expr, $alt:expr, $col:expr, $row:expr, $w:expr, $h:expr) => {
        BentoItem {
            src: $src,
            alt: $alt,
            span_col: $col,
            span_row: $row,
            width: $w,
            height: $h,
        }
    };
}

// std concat! only takes literals, so the shared unsplash query suffix is
// spelled out once here
macro_rules! unsplash {
    ($host:literal, $id:literal, $w:literal) => {
        concat!(
            "https://",
            $host,
            "/",
            $id,
            "?q=80&w=",
            $w,
            "&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D"
        )
    };
}

pub static CAT: AnimalInfo = AnimalInfo {
    title: "Cat",
    description: "Cats are small, carnivorous mammals known for their agility, curiosity, and independence.",
    facts: &[
        fact!("Scientific name", "Felis catus"),
        fact!("Class", "Mammalia"),
        fact!("Order", "Carnivora"),
        fact!("Family", "Felidae"),
        fact!("Lifespan", "12–18 years (domestic)"),
        fact!("Diet", "Obligate carnivore"),
        fact!("Habitat", "Human-associated, global"),
        fact!("Conservation", "Domesticated"),
    ],
    photos: &[
        photo!(unsplash!("images.unsplash.com", "photo-1511044568932-338cba0ad803", "1170"), "Cat hero image", Some(3), Some(2), 1200, 800),
        photo!(unsplash!("images.unsplash.com", "photo-1519052537078-e6302a4968d4", "1170"), "Cat portrait", Some(3), None, 800, 600),
        photo!(unsplash!("plus.unsplash.com", "premium_photo-1677545183884-421157b2da02", "1172"), "Cat curled up", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1533738363-b7f9aef128ce", "735"), "Playful kitten", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1543852786-1cf6624b9987", "1974"), "Cat sitting", Some(2), Some(2), 600, 800),
        photo!(unsplash!("images.unsplash.com", "photo-1478098711619-5ab0b478d6e6", "2070"), "Cat on window", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1596854407944-bf87f6fdd49e", "880"), "Cat close-up", Some(2), None, 600, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1511044568932-338cba0ad803", "1170"), "Cat yawning", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1541781774459-bb2af2f05b55", "1160"), "Cat outdoors", Some(2), None, 800, 600),
    ],
};

pub static DOG: AnimalInfo = AnimalInfo {
    title: "Dog",
    description: "Dogs are loyal and social animals with a remarkable sense of smell.",
    facts: &[
        fact!("Scientific name", "Canis lupus familiaris"),
        fact!("Class", "Mammalia"),
        fact!("Order", "Carnivora"),
        fact!("Family", "Canidae"),
        fact!("Lifespan", "10–13 years (varies by breed)"),
        fact!("Diet", "Facultative omnivore"),
        fact!("Habitat", "Human-associated, global"),
        fact!("Conservation", "Domesticated"),
    ],
    photos: &[
        photo!(unsplash!("images.unsplash.com", "photo-1642994495179-7c195f8923c0", "735"), "Dog hero image", Some(3), Some(2), 1200, 800),
        photo!(unsplash!("images.unsplash.com", "photo-1563889958768-0fa816b019c7", "687"), "Dog portrait", Some(3), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1664899070837-845a92516ead", "1074"), "Dog running", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1485981133625-f1a03c887f0a", "1170"), "Dog with toy", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1568572933382-74d440642117", "735"), "Dog standing", Some(2), Some(2), 600, 800),
        photo!(unsplash!("images.unsplash.com", "photo-1537151608828-ea2b11777ee8", "694"), "Dog on grass", Some(2), None, 800, 600),
        photo!(unsplash!("plus.unsplash.com", "premium_photo-1666229410352-c4686b71cea2", "687"), "Dog close-up", Some(2), None, 600, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1558929996-da64ba858215", "1173"), "Dog yawning", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1444212477490-ca407925329e", "1228"), "Dog outdoors", Some(2), None, 800, 600),
    ],
};

pub static ELEPHANT: AnimalInfo = AnimalInfo {
    title: "Elephant",
    description: "Elephants are the largest land mammals, known for intelligence and strong social bonds.",
    facts: &[
        fact!("Scientific name", "Elephantidae (Loxodonta, Elephas)"),
        fact!("Class", "Mammalia"),
        fact!("Order", "Proboscidea"),
        fact!("Family", "Elephantidae"),
        fact!("Lifespan", "60–70 years"),
        fact!("Diet", "Herbivore"),
        fact!("Habitat", "Savannas, forests, grasslands (Africa, Asia)"),
        fact!("Conservation", "Endangered – Critically Endangered"),
    ],
    photos: &[
        photo!(unsplash!("images.unsplash.com", "photo-1578326626553-39f72c545b07", "798"), "Elephant hero image", Some(3), Some(2), 1200, 800),
        photo!(unsplash!("plus.unsplash.com", "premium_photo-1666755275618-966ecd83bc5e", "1170"), "Elephant portrait", Some(3), None, 800, 600),
        photo!(unsplash!("plus.unsplash.com", "premium_photo-1669740462478-135db9b990ea", "687"), "Elephant herd", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1599921778557-082147629542", "1170"), "Elephant walking", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1517486430290-35657bdcef51", "1176"), "Elephant near water", Some(2), Some(2), 600, 800),
        photo!(unsplash!("plus.unsplash.com", "premium_photo-1666690195791-9b812e5382b7", "1170"), "Elephant in savanna", Some(2), None, 800, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1564760055775-d63b17a55c44", "1177"), "Elephant close-up", Some(2), None, 600, 600),
        photo!(unsplash!("images.unsplash.com", "photo-1527161153332-99adcc6f2966", "1169"), "Young elephant", Some(2), None, 800, 600),
    ],
};
