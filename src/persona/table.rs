// src/persona/table.rs
// The canonical persona table: one entry per quiz answer combination.

use super::{CardColor, HeroStyling, PersonaRecord};

const fn persona(
    title: &'static str,
    traits: [&'static str; 3],
    tagline: &'static str,
    (start, end): (&'static str, &'static str),
    superhero_name: &'static str,
    hero: HeroStyling,
) -> PersonaRecord {
    PersonaRecord {
        title,
        traits,
        tagline,
        card_color: CardColor { start, end },
        superhero_name: Some(superhero_name),
        hero: Some(hero),
    }
}

/// Keyed by `"{cartBehavior}-{paymentStyle}-{shoppingSpeed}"`.
pub static PERSONAS: [(&str, PersonaRecord); 27] = [
    // ── ghost ────────────────────────────────────────────────────────────
    (
        "ghost-prepaid-lightning",
        persona(
            "⚡ Lightning Cart Ghost 👻",
            [
                "Fills a cart in 30 seconds flat",
                "Vanishes before the payment page loads",
                "Spots a prepaid discount from a mile away",
            ],
            "If it takes longer than 5 mins, it's abandoned",
            ("#667eea", "#764ba2"),
            "Captain Vanish",
            HeroStyling {
                costume: "sleek translucent violet bodysuit with a glowing lightning-bolt emblem and a flowing semi-transparent cape",
                pose: "mid-dash, one hand reaching for a floating shopping cart that is dissolving into mist",
                powers: "crackling violet lightning trails and shimmering ghostly afterimages",
                background: "neon-lit online mall at night with floating product cards",
            },
        ),
    ),
    (
        "ghost-prepaid-planner",
        persona(
            "📋 Strategic Cart Phantom 👻",
            [
                "Builds carts like battle plans",
                "Waits for the perfect prepaid coupon",
                "Checks out only when the math is flawless",
            ],
            "The cart is saved. The moment is not yet right.",
            ("#5f72bd", "#9b23ea"),
            "The Phantom Planner",
            HeroStyling {
                costume: "midnight-blue tactical suit with holographic checklist panels on the forearms and a hooded cloak",
                pose: "standing calmly, studying a glowing holographic shopping list",
                powers: "projecting translucent price charts and countdown timers",
                background: "quiet high-tech command room full of floating wishlists",
            },
        ),
    ),
    (
        "ghost-prepaid-zen",
        persona(
            "🌸 Serene Cart Spirit 👻",
            [
                "Browses for the joy of browsing",
                "Treats the cart as a mood board",
                "Pays online only when the universe agrees",
            ],
            "Adding to cart is the journey. Checkout is optional.",
            ("#a18cd1", "#fbc2eb"),
            "Lady Lotus Wraith",
            HeroStyling {
                costume: "flowing lavender robe-armour with cherry-blossom embroidery and a soft glowing halo",
                pose: "floating cross-legged above the ground, eyes half closed",
                powers: "drifting petals that turn into tiny shopping bags",
                background: "misty garden of floating lanterns and pastel boutiques",
            },
        ),
    ),
    (
        "ghost-cod-lightning",
        persona(
            "💨 Flash Cart Poltergeist 👻",
            [
                "Adds ten items in ten seconds",
                "Only trusts cash on the doorstep",
                "Half the cart disappears before delivery day",
            ],
            "Fast fingers, cautious wallet",
            ("#4facfe", "#00f2fe"),
            "The Blur Spectre",
            HeroStyling {
                costume: "electric-blue speedster suit with cash-note motifs and a wispy tattered scarf",
                pose: "sprinting past a doorstep with a parcel in one hand",
                powers: "wind vortices and flickering teleport streaks",
                background: "city street at dusk lined with delivery vans",
            },
        ),
    ),
    (
        "ghost-cod-planner",
        persona(
            "🗂️ Careful Cart Haunter 👻",
            [
                "Keeps three carts for three scenarios",
                "Cash on delivery, always, no exceptions",
                "Checks the return policy twice",
            ],
            "Trust is earned at the doorstep",
            ("#43cea2", "#185a9d"),
            "Sentinel Shade",
            HeroStyling {
                costume: "teal armoured trench coat with a shield-shaped padlock emblem and glowing blue trim",
                pose: "arms crossed, guarding a stack of neatly labelled parcels",
                powers: "a protective shimmering force field around every delivery",
                background: "orderly warehouse with glowing shelves and tracking maps",
            },
        ),
    ),
    (
        "ghost-cod-zen",
        persona(
            "🍃 Mellow Cart Wanderer 👻",
            [
                "Lets the cart age like fine wine",
                "Pays in cash, on their own time",
                "Never feels shopping FOMO",
            ],
            "It will still be there tomorrow",
            ("#89f7fe", "#66a6ff"),
            "The Drifting Whisper",
            HeroStyling {
                costume: "airy sky-blue hooded cape over a soft white suit with leaf patterns",
                pose: "gently floating with a relaxed smile, a leaf resting on one palm",
                powers: "a calming breeze that slows time around them",
                background: "sunlit bamboo forest with a tiny market stall",
            },
        ),
    ),
    (
        "ghost-bnpl-lightning",
        persona(
            "⏱️ Instant Cart Apparition 👻",
            [
                "Fills carts at warp speed",
                "Loves the idea of pay-later",
                "Rarely pays now or later",
            ],
            "Buy now, pay later, checkout never",
            ("#f093fb", "#f5576c"),
            "Miss Warp Wisp",
            HeroStyling {
                costume: "hot-pink chrome suit with a clock-face chest emblem and a comet-tail cape",
                pose: "bursting out of a swirling time portal",
                powers: "rewinding and fast-forwarding glowing clock hands",
                background: "futuristic shopping district warped by time ripples",
            },
        ),
    ),
    (
        "ghost-bnpl-planner",
        persona(
            "🗓️ Calendar Cart Ghost 👻",
            [
                "Schedules purchases around instalment dates",
                "Keeps a spreadsheet of saved carts",
                "Commits only when the payment plan fits",
            ],
            "Every cart has its season",
            ("#ff9a9e", "#fad0c4"),
            "The Instalment Oracle",
            HeroStyling {
                costume: "rose-gold suit with orbiting calendar pages and a crystal visor",
                pose: "pointing at a glowing floating calendar",
                powers: "summoning perfectly timed payment schedules out of thin air",
                background: "elegant observatory with planets shaped like price tags",
            },
        ),
    ),
    (
        "ghost-bnpl-zen",
        persona(
            "☁️ Dreamy Cart Spirit 👻",
            [
                "Saves items like collecting daydreams",
                "Considers pay-later a lifestyle",
                "Completely unbothered by cart expiry",
            ],
            "Someday is a perfectly valid delivery date",
            ("#fbc2eb", "#a6c1ee"),
            "Cloud Muse",
            HeroStyling {
                costume: "pastel cloud-textured suit with a rainbow sash and feathered shoulder pieces",
                pose: "lounging on a drifting cloud, scrolling a glowing phone",
                powers: "turning wishes into floating soap-bubble products",
                background: "cotton-candy sky full of floating shops",
            },
        ),
    ),
    // ── decisive ─────────────────────────────────────────────────────────
    (
        "decisive-prepaid-lightning",
        persona(
            "🚀 Turbo Checkout Queen 👑",
            [
                "One click, done, next",
                "Prepaid for the discount, obviously",
                "Has checkout shortcuts memorised",
            ],
            "Why think when you can buy?",
            ("#f7971e", "#ffd200"),
            "Queen Quickpay",
            HeroStyling {
                costume: "gold and crimson armoured suit with a crown-shaped visor and rocket boots",
                pose: "launching upward with a shopping bag held high like a trophy",
                powers: "golden rocket flames and exploding confetti of coupons",
                background: "skyline of giant sale banners at sunrise",
            },
        ),
    ),
    (
        "decisive-prepaid-planner",
        persona(
            "🎯 Precision Shopper Pro 🎯",
            [
                "Knows exactly what they need",
                "Pays upfront to lock the best price",
                "Zero regrets, zero returns",
            ],
            "Target acquired. Order placed.",
            ("#11998e", "#38ef7d"),
            "Bullseye Buyer",
            HeroStyling {
                costume: "emerald tactical suit with a glowing target emblem and a sleek visor",
                pose: "aiming a glowing cursor like an archer drawing a bow",
                powers: "laser-precise targeting beams that lock onto deals",
                background: "sleek digital storefront grid with highlighted bargains",
            },
        ),
    ),
    (
        "decisive-prepaid-zen",
        persona(
            "🧘 Mindful Impulse Buyer 🌿",
            [
                "Buys from the heart, instantly",
                "Always prepaid, always calm",
                "Never second-guesses a purchase",
            ],
            "If it sparks joy, it ships today",
            ("#56ab2f", "#a8e063"),
            "Serenity Strike",
            HeroStyling {
                costume: "sage-green flowing suit with golden lotus armour plates",
                pose: "balanced on one foot, catching a falling parcel with perfect calm",
                powers: "radiant green aura that clears away indecision",
                background: "tranquil rooftop garden overlooking a bustling market",
            },
        ),
    ),
    (
        "decisive-cod-lightning",
        persona(
            "💥 Blitz Buyer Supreme 💥",
            [
                "Decides before the product video ends",
                "Cash ready at the door",
                "Orders faster than delivery can keep up",
            ],
            "See it. Want it. Cash it.",
            ("#ff416c", "#ff4b2b"),
            "Blaze Bargainista",
            HeroStyling {
                costume: "fiery red suit with flame motifs and a coin-belt utility harness",
                pose: "crashing down in a superhero landing among delivery boxes",
                powers: "shockwaves of flame that light up every sale sign",
                background: "busy delivery hub exploding with parcels",
            },
        ),
    ),
    (
        "decisive-cod-planner",
        persona(
            "🛡️ Confident Cash Commander 💪",
            [
                "Makes fast decisions from a solid plan",
                "Trusts cash over cards",
                "Never pays for what hasn't arrived",
            ],
            "Decisive in choice, careful with cash",
            ("#355c7d", "#c06c84"),
            "Commander Cashguard",
            HeroStyling {
                costume: "navy and rose armoured uniform with a shield emblem and a flowing cape",
                pose: "standing tall, holding a shield stamped with a rupee symbol",
                powers: "an unbreakable shield that blocks every shady seller",
                background: "fortress-like marketplace with banners flying",
            },
        ),
    ),
    (
        "decisive-cod-zen",
        persona(
            "☀️ Easygoing Decider 😎",
            [
                "Decides quickly, worries never",
                "Pays cash whenever the parcel shows up",
                "Shopping is just another good vibe",
            ],
            "Add, order, chill",
            ("#f6d365", "#fda085"),
            "Sunny Sureshot",
            HeroStyling {
                costume: "sunshine-yellow suit with orange sunburst patterns and reflective aviator goggles",
                pose: "leaning back casually on a giant shopping bag, giving a thumbs up",
                powers: "warm sunbeams that make every parcel arrive on time",
                background: "beachside boardwalk lined with colourful stalls",
            },
        ),
    ),
    (
        "decisive-bnpl-lightning",
        persona(
            "⚡ Instant Gratification Icon ✨",
            [
                "Wants it now, pays for it later",
                "Checkout speed: legendary",
                "Instalments are a superpower",
            ],
            "Now is the only shipping speed",
            ("#fc466b", "#3f5efb"),
            "Nova Now",
            HeroStyling {
                costume: "magenta and electric-blue suit with star-burst emblem and light-trail boots",
                pose: "mid-leap with a shower of sparkles and shopping bags",
                powers: "supernova bursts that deliver products instantly",
                background: "galaxy-themed megastore with glowing aisles",
            },
        ),
    ),
    (
        "decisive-bnpl-planner",
        persona(
            "📊 Smart Split Strategist 🧠",
            [
                "Knows what they want and when to pay",
                "Maps every instalment in advance",
                "Never misses a due date",
            ],
            "Bold buys, balanced budgets",
            ("#8e2de2", "#4a00e0"),
            "The Split Sorceress",
            HeroStyling {
                costume: "deep purple sorcerer suit with glowing geometric runes and a star-map cape",
                pose: "splitting a glowing orb into three equal parts with both hands",
                powers: "arcane charts that divide any price into perfect instalments",
                background: "mystical library of floating receipts and ledgers",
            },
        ),
    ),
    (
        "decisive-bnpl-zen",
        persona(
            "🌊 Go-With-The-Flow Buyer 🌈",
            [
                "Decides with instinct, pays with ease",
                "Pay-later keeps the vibes high",
                "Zero checkout anxiety",
            ],
            "Treat yourself now, thank yourself later",
            ("#00c6ff", "#0072ff"),
            "Tidal Treat",
            HeroStyling {
                costume: "ocean-blue suit with wave patterns and a pearl-studded belt",
                pose: "surfing a giant wave made of shopping bags",
                powers: "summoning gentle waves that carry parcels home",
                background: "sunny coastal market with turquoise water",
            },
        ),
    ),
    // ── collector ────────────────────────────────────────────────────────
    (
        "collector-prepaid-lightning",
        persona(
            "💎 Flash Sale Curator 💎",
            [
                "Wishlist ready before the sale starts",
                "Prepaid for every extra discount",
                "Grabs limited drops in seconds",
            ],
            "Curated slowly, claimed instantly",
            ("#e96443", "#904e95"),
            "Gemstrike",
            HeroStyling {
                costume: "faceted crystal armour in ruby and amethyst with a glowing gem core",
                pose: "snatching a sparkling gem from mid-air",
                powers: "crystal shards that freeze flash-sale timers",
                background: "glittering vault of limited-edition treasures",
            },
        ),
    ),
    (
        "collector-prepaid-planner",
        persona(
            "📚 Wishlist Architect 🏛️",
            [
                "Runs wishlists like a museum catalogue",
                "Prepays only for carefully chosen pieces",
                "Has price alerts on everything",
            ],
            "Every item earns its place",
            ("#c471f5", "#fa71cd"),
            "The Curator Prime",
            HeroStyling {
                costume: "elegant plum and pink suit with gilded museum-frame shoulder plates",
                pose: "presenting a glass display case with a proud smile",
                powers: "golden frames that appear around the best deals",
                background: "grand gallery hall with spotlighted products",
            },
        ),
    ),
    (
        "collector-prepaid-zen",
        persona(
            "🕊️ Tranquil Treasure Keeper 🌙",
            [
                "Collects beautiful things, slowly",
                "Pays online once the wishlist feels complete",
                "Knows the story behind every item",
            ],
            "Good things come to those who wishlist",
            ("#b993d6", "#8ca6db"),
            "Moonlit Keeper",
            HeroStyling {
                costume: "silver-lilac suit with crescent-moon ornaments and a starry veil",
                pose: "holding a glowing treasure chest under the moonlight",
                powers: "soft moonbeams that reveal hidden gems",
                background: "moonlit treasure garden with floating keepsakes",
            },
        ),
    ),
    (
        "collector-cod-lightning",
        persona(
            "🏃 Speedy Collector 💰",
            [
                "Knows the wishlist by heart",
                "Orders the instant stock appears",
                "Keeps cash ready for every delivery",
            ],
            "Restocked? Already ordered.",
            ("#f12711", "#f5af19"),
            "Restock Rocket",
            HeroStyling {
                costume: "orange and gold jet-pack suit with a coin-shaped chest emblem",
                pose: "flying low over a row of shelves, grabbing items as they restock",
                powers: "jet bursts and a magnetic pull on coveted items",
                background: "massive warehouse with restock alarms flashing",
            },
        ),
    ),
    (
        "collector-cod-planner",
        persona(
            "🗃️ Master Wishlist Keeper 🔐",
            [
                "Organises wishlists by season and budget",
                "Only pays cash after inspecting the parcel",
                "Has never fallen for a fake deal",
            ],
            "Planned, verified, delivered",
            ("#1d976c", "#93f9b9"),
            "Vault Guardian",
            HeroStyling {
                costume: "jade armoured suit with vault-door chest plate and combination-lock gauntlets",
                pose: "unlocking a giant vault door revealing neatly stacked parcels",
                powers: "verification scanners that expose counterfeit products",
                background: "secure vault lined with catalogued treasures",
            },
        ),
    ),
    (
        "collector-cod-zen",
        persona(
            "🌿 Patient Treasure Hunter 🍵",
            [
                "Wishlists with infinite patience",
                "Pays in cash, never in a hurry",
                "Always finds the hidden gem",
            ],
            "The best finds take their time",
            ("#3ca55c", "#b5ac49"),
            "Jade Seeker",
            HeroStyling {
                costume: "earthy green explorer suit with a tea-leaf cape and brass compass amulet",
                pose: "kneeling to uncover a glowing treasure among leaves",
                powers: "a compass that always points to the best deal",
                background: "hidden bazaar deep in a lush forest",
            },
        ),
    ),
    (
        "collector-bnpl-lightning",
        persona(
            "✨ Drop-Day Dynamo 🛍️",
            [
                "First in line for every launch",
                "Pay-later makes big drops possible",
                "Wishlist turns into orders in seconds",
            ],
            "Launch day is a holiday",
            ("#ee0979", "#ff6a00"),
            "Dropzone Diva",
            HeroStyling {
                costume: "hot-pink and orange street-style supersuit with sneaker-shaped boots and holographic jacket",
                pose: "catching a parcel dropping from a glowing sky portal",
                powers: "countdown shockwaves that clear the queue",
                background: "packed launch event with spotlights and confetti",
            },
        ),
    ),
    (
        "collector-bnpl-planner",
        persona(
            "🧩 Instalment Collector Elite 💼",
            [
                "Plans collections around payment cycles",
                "Uses pay-later like a pro",
                "Completes every set, eventually",
            ],
            "One instalment closer to the full collection",
            ("#2193b0", "#6dd5ed"),
            "Puzzle Paladin",
            HeroStyling {
                costume: "cyan armoured suit with interlocking puzzle-piece plates",
                pose: "slotting the final glowing puzzle piece into a floating collection",
                powers: "assembling collections from scattered shards of light",
                background: "floating puzzle-piece city of tiny stores",
            },
        ),
    ),
    (
        "collector-bnpl-zen",
        persona(
            "🎨 Dreamy Collector Spirit 🦋",
            [
                "Collects only what feels magical",
                "Pays later, worries never",
                "The wishlist is a work of art",
            ],
            "Collecting joy, one instalment at a time",
            ("#ff758c", "#ff7eb3"),
            "Butterfly Belle",
            HeroStyling {
                costume: "iridescent pink suit with butterfly-wing cape and flower crown",
                pose: "surrounded by fluttering butterflies carrying tiny parcels",
                powers: "butterflies that carry wishes straight to the cart",
                background: "enchanted meadow with pastel pop-up boutiques",
            },
        ),
    ),
];
