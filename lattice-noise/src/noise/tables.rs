//! Fixed direction tables shared by every noise family.
//!
//! `GRAD_2D`, `GRAD_3D` and `SIMPLEX_4D` are the classic reference tables.
//! `CELL_2D` and `CELL_3D` are not: they are locally generated unit directions
//! (an evenly spaced circle and a Fibonacci sphere, shuffled), so cellular and
//! gradient-perturb output does not match the widely published tables value
//! for value.
//!
//! Output is only reproducible as long as the tables stay byte-for-byte
//! identical, so never regenerate or reorder them.

#![allow(
    clippy::unreadable_literal,
    clippy::excessive_precision,
    reason = "table data"
)]

use crate::math::Float;

/// 2D gradient directions, indexed with `hash & 7`.
pub(crate) const GRAD_2D: [[Float; 2]; 8] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, 1.0],
    [0.0, -1.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
];

/// 3D gradient directions (cube edge midpoints, four repeated), indexed with `hash & 15`.
pub(crate) const GRAD_3D: [[Float; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, -1.0],
];

/// Rank of each axis within a 4D simplex, indexed by the six-comparison code
/// shifted left by two. Unreachable codes are zero-filled.
pub(crate) const SIMPLEX_4D: [u8; 256] = [
    0, 1, 2, 3, 0, 1, 3, 2, 0, 0, 0, 0, 0, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 0,
    0, 2, 1, 3, 0, 0, 0, 0, 0, 3, 1, 2, 0, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 2, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 2, 0, 3, 0, 0, 0, 0, 1, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 0, 1, 2, 3, 1, 0,
    1, 0, 2, 3, 1, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 3, 1, 0, 0, 0, 0, 2, 1, 3, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 2, 3, 0, 2, 1, 0, 0, 0, 0, 3, 1, 2, 0,
    2, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 0, 2, 0, 0, 0, 0, 3, 2, 0, 1, 3, 2, 1, 0,
];

/// Unit feature-point offsets for 2D cellular noise and 2D domain warp,
/// indexed with `hash & 255`. Evenly spaced directions in a fixed shuffle.
pub(crate) const CELL_2D: [[Float; 2]; 256] = [
    [0.4605387110, -0.8876396204],
    [0.8639728561, -0.5035383837],
    [0.9993223846, 0.0368072229],
    [0.8245893028, 0.5657318108],
    [0.3939920401, 0.9191138517],
    [-0.1588581433, 0.9873014182],
    [-0.6624157776, 0.7491363945],
    [-0.9604305194, 0.2785196894],
    [-0.9604305194, -0.2785196894],
    [-0.6624157776, -0.7491363945],
    [-0.1588581433, -0.9873014182],
    [0.3939920401, -0.9191138517],
    [0.8245893028, -0.5657318108],
    [0.9993223846, -0.0368072229],
    [0.8639728561, 0.5035383837],
    [0.4605387110, 0.8876396204],
    [-0.0857973123, 0.9963126122],
    [-0.6055110414, 0.7958369046],
    [-0.9373390119, 0.3484186802],
    [-0.9783173707, -0.2071113762],
    [-0.7157308253, -0.6983762494],
    [-0.2310581083, -0.9729399522],
    [0.3253102922, -0.9456073254],
    [0.7807372286, -0.6248594881],
    [0.9939069700, -0.1102222073],
    [0.8986744657, 0.4386162385],
    [0.5245896827, 0.8513551931],
    [-0.0122715383, 0.9999247018],
    [-0.5453249884, 0.8382247056],
    [-0.9091679831, 0.4164295601],
    [-0.9909026354, -0.1345807085],
    [-0.7651672656, -0.6438315429],
    [-0.3020059493, -0.9533060404],
    [0.2548656596, -0.9669764710],
    [0.7326542717, -0.6806009978],
    [0.9831054874, -0.1830398880],
    [0.9285060805, 0.3713171940],
    [0.5857978575, 0.8104571983],
    [0.0613207363, 0.9981181129],
    [-0.4821837721, 0.8760700942],
    [-0.8760700942, 0.4821837721],
    [-0.9981181129, -0.0613207363],
    [-0.8104571983, -0.5857978575],
    [-0.3713171940, -0.9285060805],
    [0.1830398880, -0.9831054874],
    [0.6806009978, -0.7326542717],
    [0.9669764710, -0.2548656596],
    [0.9533060404, 0.3020059493],
    [0.6438315429, 0.7651672656],
    [0.1345807085, 0.9909026354],
    [-0.4164295601, 0.9091679831],
    [-0.8382247056, 0.5453249884],
    [-0.9999247018, 0.0122715383],
    [-0.8513551931, -0.5245896827],
    [-0.4386162385, -0.8986744657],
    [0.1102222073, -0.9939069700],
    [0.6248594881, -0.7807372286],
    [0.9456073254, -0.3253102922],
    [0.9729399522, 0.2310581083],
    [0.6983762494, 0.7157308253],
    [0.2071113762, 0.9783173707],
    [-0.3484186802, 0.9373390119],
    [-0.7958369046, 0.6055110414],
    [-0.9963126122, 0.0857973123],
    [-0.8876396204, -0.4605387110],
    [-0.5035383837, -0.8639728561],
    [0.0368072229, -0.9993223846],
    [0.5657318108, -0.8245893028],
    [0.9191138517, -0.3939920401],
    [0.9873014182, 0.1588581433],
    [0.7491363945, 0.6624157776],
    [0.2785196894, 0.9604305194],
    [-0.2785196894, 0.9604305194],
    [-0.7491363945, 0.6624157776],
    [-0.9873014182, 0.1588581433],
    [-0.9191138517, -0.3939920401],
    [-0.5657318108, -0.8245893028],
    [-0.0368072229, -0.9993223846],
    [0.5035383837, -0.8639728561],
    [0.8876396204, -0.4605387110],
    [0.9963126122, 0.0857973123],
    [0.7958369046, 0.6055110414],
    [0.3484186802, 0.9373390119],
    [-0.2071113762, 0.9783173707],
    [-0.6983762494, 0.7157308253],
    [-0.9729399522, 0.2310581083],
    [-0.9456073254, -0.3253102922],
    [-0.6248594881, -0.7807372286],
    [-0.1102222073, -0.9939069700],
    [0.4386162385, -0.8986744657],
    [0.8513551931, -0.5245896827],
    [0.9999247018, 0.0122715383],
    [0.8382247056, 0.5453249884],
    [0.4164295601, 0.9091679831],
    [-0.1345807085, 0.9909026354],
    [-0.6438315429, 0.7651672656],
    [-0.9533060404, 0.3020059493],
    [-0.9669764710, -0.2548656596],
    [-0.6806009978, -0.7326542717],
    [-0.1830398880, -0.9831054874],
    [0.3713171940, -0.9285060805],
    [0.8104571983, -0.5857978575],
    [0.9981181129, -0.0613207363],
    [0.8760700942, 0.4821837721],
    [0.4821837721, 0.8760700942],
    [-0.0613207363, 0.9981181129],
    [-0.5857978575, 0.8104571983],
    [-0.9285060805, 0.3713171940],
    [-0.9831054874, -0.1830398880],
    [-0.7326542717, -0.6806009978],
    [-0.2548656596, -0.9669764710],
    [0.3020059493, -0.9533060404],
    [0.7651672656, -0.6438315429],
    [0.9909026354, -0.1345807085],
    [0.9091679831, 0.4164295601],
    [0.5453249884, 0.8382247056],
    [0.0122715383, 0.9999247018],
    [-0.5245896827, 0.8513551931],
    [-0.8986744657, 0.4386162385],
    [-0.9939069700, -0.1102222073],
    [-0.7807372286, -0.6248594881],
    [-0.3253102922, -0.9456073254],
    [0.2310581083, -0.9729399522],
    [0.7157308253, -0.6983762494],
    [0.9783173707, -0.2071113762],
    [0.9373390119, 0.3484186802],
    [0.6055110414, 0.7958369046],
    [0.0857973123, 0.9963126122],
    [-0.4605387110, 0.8876396204],
    [-0.8639728561, 0.5035383837],
    [-0.9993223846, -0.0368072229],
    [-0.8245893028, -0.5657318108],
    [-0.3939920401, -0.9191138517],
    [0.1588581433, -0.9873014182],
    [0.6624157776, -0.7491363945],
    [0.9604305194, -0.2785196894],
    [0.9604305194, 0.2785196894],
    [0.6624157776, 0.7491363945],
    [0.1588581433, 0.9873014182],
    [-0.3939920401, 0.9191138517],
    [-0.8245893028, 0.5657318108],
    [-0.9993223846, 0.0368072229],
    [-0.8639728561, -0.5035383837],
    [-0.4605387110, -0.8876396204],
    [0.0857973123, -0.9963126122],
    [0.6055110414, -0.7958369046],
    [0.9373390119, -0.3484186802],
    [0.9783173707, 0.2071113762],
    [0.7157308253, 0.6983762494],
    [0.2310581083, 0.9729399522],
    [-0.3253102922, 0.9456073254],
    [-0.7807372286, 0.6248594881],
    [-0.9939069700, 0.1102222073],
    [-0.8986744657, -0.4386162385],
    [-0.5245896827, -0.8513551931],
    [0.0122715383, -0.9999247018],
    [0.5453249884, -0.8382247056],
    [0.9091679831, -0.4164295601],
    [0.9909026354, 0.1345807085],
    [0.7651672656, 0.6438315429],
    [0.3020059493, 0.9533060404],
    [-0.2548656596, 0.9669764710],
    [-0.7326542717, 0.6806009978],
    [-0.9831054874, 0.1830398880],
    [-0.9285060805, -0.3713171940],
    [-0.5857978575, -0.8104571983],
    [-0.0613207363, -0.9981181129],
    [0.4821837721, -0.8760700942],
    [0.8760700942, -0.4821837721],
    [0.9981181129, 0.0613207363],
    [0.8104571983, 0.5857978575],
    [0.3713171940, 0.9285060805],
    [-0.1830398880, 0.9831054874],
    [-0.6806009978, 0.7326542717],
    [-0.9669764710, 0.2548656596],
    [-0.9533060404, -0.3020059493],
    [-0.6438315429, -0.7651672656],
    [-0.1345807085, -0.9909026354],
    [0.4164295601, -0.9091679831],
    [0.8382247056, -0.5453249884],
    [0.9999247018, -0.0122715383],
    [0.8513551931, 0.5245896827],
    [0.4386162385, 0.8986744657],
    [-0.1102222073, 0.9939069700],
    [-0.6248594881, 0.7807372286],
    [-0.9456073254, 0.3253102922],
    [-0.9729399522, -0.2310581083],
    [-0.6983762494, -0.7157308253],
    [-0.2071113762, -0.9783173707],
    [0.3484186802, -0.9373390119],
    [0.7958369046, -0.6055110414],
    [0.9963126122, -0.0857973123],
    [0.8876396204, 0.4605387110],
    [0.5035383837, 0.8639728561],
    [-0.0368072229, 0.9993223846],
    [-0.5657318108, 0.8245893028],
    [-0.9191138517, 0.3939920401],
    [-0.9873014182, -0.1588581433],
    [-0.7491363945, -0.6624157776],
    [-0.2785196894, -0.9604305194],
    [0.2785196894, -0.9604305194],
    [0.7491363945, -0.6624157776],
    [0.9873014182, -0.1588581433],
    [0.9191138517, 0.3939920401],
    [0.5657318108, 0.8245893028],
    [0.0368072229, 0.9993223846],
    [-0.5035383837, 0.8639728561],
    [-0.8876396204, 0.4605387110],
    [-0.9963126122, -0.0857973123],
    [-0.7958369046, -0.6055110414],
    [-0.3484186802, -0.9373390119],
    [0.2071113762, -0.9783173707],
    [0.6983762494, -0.7157308253],
    [0.9729399522, -0.2310581083],
    [0.9456073254, 0.3253102922],
    [0.6248594881, 0.7807372286],
    [0.1102222073, 0.9939069700],
    [-0.4386162385, 0.8986744657],
    [-0.8513551931, 0.5245896827],
    [-0.9999247018, -0.0122715383],
    [-0.8382247056, -0.5453249884],
    [-0.4164295601, -0.9091679831],
    [0.1345807085, -0.9909026354],
    [0.6438315429, -0.7651672656],
    [0.9533060404, -0.3020059493],
    [0.9669764710, 0.2548656596],
    [0.6806009978, 0.7326542717],
    [0.1830398880, 0.9831054874],
    [-0.3713171940, 0.9285060805],
    [-0.8104571983, 0.5857978575],
    [-0.9981181129, 0.0613207363],
    [-0.8760700942, -0.4821837721],
    [-0.4821837721, -0.8760700942],
    [0.0613207363, -0.9981181129],
    [0.5857978575, -0.8104571983],
    [0.9285060805, -0.3713171940],
    [0.9831054874, 0.1830398880],
    [0.7326542717, 0.6806009978],
    [0.2548656596, 0.9669764710],
    [-0.3020059493, 0.9533060404],
    [-0.7651672656, 0.6438315429],
    [-0.9909026354, 0.1345807085],
    [-0.9091679831, -0.4164295601],
    [-0.5453249884, -0.8382247056],
    [-0.0122715383, -0.9999247018],
    [0.5245896827, -0.8513551931],
    [0.8986744657, -0.4386162385],
    [0.9939069700, 0.1102222073],
    [0.7807372286, 0.6248594881],
    [0.3253102922, 0.9456073254],
    [-0.2310581083, 0.9729399522],
    [-0.7157308253, 0.6983762494],
    [-0.9783173707, 0.2071113762],
    [-0.9373390119, -0.3484186802],
    [-0.6055110414, -0.7958369046],
    [-0.0857973123, -0.9963126122],
];

/// Unit feature-point offsets for 3D cellular noise and 3D domain warp,
/// indexed with `hash & 255`. Fibonacci-sphere points in a fixed shuffle.
pub(crate) const CELL_3D: [[Float; 3]; 256] = [
    [-0.4359648512, -0.1835937500, -0.8810380148],
    [0.6806143214, 0.7304687500, -0.0563875053],
    [0.8187338929, -0.3554687500, 0.4509066205],
    [-0.6394164594, 0.5585937500, 0.5283177206],
    [-0.8450192057, -0.5273437500, 0.0886064974],
    [0.2480839907, 0.3867187500, -0.8882020840],
    [0.5410577030, -0.6992187500, -0.4672790405],
    [0.3215668907, 0.2148437500, 0.9221913565],
    [-0.1217671801, -0.8710937500, 0.4757819170],
    [-0.8088104759, 0.0429687500, -0.5864974856],
    [0.2446762138, 0.9570312500, -0.1556429791],
    [0.9914679969, -0.1289062500, 0.0193491554],
    [-0.2390867471, 0.7851562500, 0.5712855595],
    [-0.7933258005, -0.3007812500, 0.5293059738],
    [-0.1658339548, 0.6132812500, -0.7722598059],
    [0.3224004346, -0.4726562500, -0.8201548812],
    [0.6557014441, 0.4414062500, 0.6125488868],
    [0.1767940344, -0.6445312500, 0.7438570677],
    [-0.9530932940, 0.2695312500, -0.1377173854],
    [-0.4304875237, -0.8164062500, -0.3849172987],
    [0.8898248695, 0.0976562500, -0.4457296922],
    [0.1515152009, -0.9882812500, 0.0185287557],
    [-0.4768164227, -0.0742187500, 0.8758639599],
    [-0.3477950042, 0.8398437500, -0.4167746521],
    [-0.1057797000, -0.2460937500, -0.9634565487],
    [0.7177238388, 0.6679687500, 0.1966983483],
    [0.5971367941, -0.4179687500, 0.6846384252],
    [-0.8184506627, 0.4960937500, 0.2898784296],
    [-0.7832705121, -0.5898437500, -0.1963966789],
    [0.5515865100, 0.3242187500, -0.7685275038],
    [0.6058690415, -0.7617187500, -0.2295805968],
    [-0.0144635485, 0.1523437500, 0.9882217300],
    [-0.2025378895, -0.9335937500, 0.2956029656],
    [-0.5589513048, -0.0195312500, -0.8289704272],
    [0.4365793614, 0.8945312500, -0.0959807479],
    [0.9152089754, -0.1914062500, 0.3546211766],
    [-0.4693848043, 0.7226562500, 0.5073912197],
    [-0.9053682608, -0.3632812500, 0.2198523272],
    [0.1153319805, 0.5507812500, -0.8266429392],
    [0.5599905090, -0.5351562500, -0.6324700925],
    [0.4185064922, 0.3789062500, 0.8253983097],
    [-0.0824163134, -0.7070312500, 0.7023634122],
    [-0.8615293425, 0.2070312500, -0.4635787457],
    [-0.2249390451, -0.8789062500, -0.4206259974],
    [0.9928684530, 0.0351562500, -0.1139134454],
    [-0.0816758896, 0.9492187500, 0.3038302383],
    [-0.7433622234, -0.1367187500, 0.6547675833],
    [-0.2129122278, 0.7773437500, -0.5919502323],
    [0.2268367028, -0.3085937500, -0.9237505116],
    [0.6488299241, 0.6054687500, 0.4608983861],
    [0.3147586651, -0.4804687500, 0.8185821663],
    [-0.9010655734, 0.4335937500, -0.0087916091],
    [-0.6273226192, -0.6523437500, -0.4253398209],
    [0.7975869313, 0.2617187500, -0.5434688426],
    [0.5662303572, -0.8242187500, -0.0068289628],
    [-0.3553055329, 0.0898437500, 0.9304225271],
    [-0.0718699661, -0.9960937500, 0.0513025262],
    [-0.2399006429, -0.0820312500, -0.9673254652],
    [0.5497747081, 0.8320312500, 0.0739714094],
    [0.7272874179, -0.2539062500, 0.6376398890],
    [-0.6682685609, 0.6601562500, 0.3429443921],
    [-0.8991641730, -0.4257812500, -0.1010649153],
    [0.4097641245, 0.4882812500, -0.7705029417],
    [0.7051530004, -0.5976562500, -0.3815314572],
    [0.1127240482, 0.3164062500, 0.9419025289],
    [-0.2874835183, -0.7695312500, 0.5702410736],
    [-0.6576486037, 0.1445312500, -0.7393301237],
    [-0.0473739075, -0.9414062500, -0.3339311087],
    [0.9719366905, -0.0273437500, 0.2336480022],
    [-0.2658876648, 0.8867187500, 0.3781978425],
    [-0.9129403206, -0.1992187500, 0.3561626884],
    [0.0034113022, 0.7148437500, -0.6992758941],
    [0.5173639599, -0.3710937500, -0.7711186431],
    [0.4762412370, 0.5429687500, 0.6916496372],
    [0.0142231458, -0.5429687500, 0.8396324426],
    [-0.8691000702, 0.3710937500, -0.3270389835],
    [-0.4090484319, -0.7148437500, -0.5671664601],
    [0.9499790063, 0.1992187500, -0.2405239639],
    [0.4361378800, -0.8867187500, 0.1533414754],
    [-0.6553230008, 0.0273437500, 0.7548536838],
    [-0.1554523121, 0.9414062500, -0.2993139675],
    [0.1057244572, -0.1445312500, -0.9838358892],
    [0.5652900803, 0.7695312500, 0.2971006233],
    [0.4554881061, -0.3164062500, 0.8321163802],
    [-0.7955975940, 0.5976562500, 0.0991537959],
    [-0.7811656571, -0.4882812500, -0.3890522293],
    [0.6731220214, 0.4257812500, -0.6046627750],
    [0.7431582617, -0.6601562500, -0.1091307641],
    [-0.2214852150, 0.2539062500, 0.9415284997],
    [-0.4044911102, -0.8320312500, 0.3796194685],
    [-0.3667481263, 0.0820312500, -0.9266966526],
    [0.0883019887, 0.9960937500, 0.0000000000],
    [0.8297528026, -0.0898437500, 0.5508524186],
    [-0.4648287111, 0.8242187500, 0.3234157101],
    [-0.9649145102, -0.2617187500, 0.0210543064],
    [0.2634668642, 0.6523437500, -0.7106566283],
    [0.7282794121, -0.4335937500, -0.5306652032],
    [0.2194020622, 0.4804687500, 0.8491245582],
    [-0.2603127455, -0.6054687500, 0.7520936559],
    [-0.7213142290, 0.3085937500, -0.6200610297],
    [-0.1706252363, -0.7773437500, -0.6054946103],
    [0.9854438173, 0.1367187500, 0.1010369553],
    [0.2429990816, -0.9492187500, 0.1998379618],
    [-0.8742891373, -0.0351562500, 0.4841307081],
    [-0.0612988991, 0.8789062500, -0.4730393733],
    [0.4318738959, -0.2070312500, -0.8778513539],
    [0.4751453006, 0.7070312500, 0.5237783452],
    [0.1389206649, -0.3789062500, 0.9149486885],
    [-0.8232409416, 0.5351562500, -0.1894258170],
    [-0.5741408236, -0.5507812500, -0.6058071717],
    [0.8646211376, 0.3632812500, -0.3470691887],
    [0.6768264469, -0.7226562500, 0.1402636987],
    [-0.5388675443, 0.1914062500, 0.8203568840],
    [-0.4111005793, -0.8945312500, 0.1755282212],
    [-0.0266864399, 0.0195312500, -0.9994530325],
    [0.3365900423, 0.9335937500, 0.1229221436],
    [0.5859184673, -0.1523437500, 0.7959214356],
    [-0.6265074301, 0.7617187500, 0.1651453479],
    [-0.8954487579, -0.3242187500, -0.3050470851],
    [0.5234081365, 0.5898437500, -0.6149213553],
    [0.8345623710, -0.4960937500, -0.2395759590],
    [-0.0882485267, 0.4179687500, 0.9041649858],
    [-0.4698837068, -0.6679687500, 0.5770849600],
    [-0.4736628467, 0.2460937500, -0.8456248423],
    [0.0409325171, -0.8398437500, -0.5412827400],
    [0.8969539075, 0.0742187500, 0.4358500487],
    [-0.1125548871, 0.9882812500, 0.1031094966],
    [-0.9832025713, -0.0976562500, 0.1541945542],
    [0.1267456611, 0.8164062500, -0.5633971711],
    [0.6957208305, -0.2695312500, -0.6658268779],
    [0.2882785063, 0.6445312500, 0.7081489748],
    [-0.1777982068, -0.4414062500, 0.8795159578],
    [-0.7389066371, 0.4726562500, -0.4802218768],
    [-0.3137007285, -0.6132812500, -0.7248985869],
    [0.9532178510, 0.3007812500, -0.0301059500],
    [0.5265062478, -0.7851562500, 0.3260687567],
    [-0.7957251219, 0.1289062500, 0.5917809637],
    [-0.2895716117, -0.9570312500, 0.0154747616],
    [0.3175509325, -0.0429687500, -0.9472671702],
    [0.3755319424, 0.8710937500, 0.3164987187],
    [0.2740566211, -0.2148437500, 0.9374087324],
    [-0.7118570585, 0.6992187500, -0.0659747522],
    [-0.7179543695, -0.3867187500, -0.5787833202],
    [0.7392499278, 0.5273437500, -0.4188294564],
    [0.8273751699, -0.5585937500, 0.0585094073],
    [-0.4044045771, 0.3554687500, 0.8426736651],
    [-0.5867200773, -0.7304687500, 0.3495353432],
    [-0.1570371963, 0.1835937500, -0.9703775832],
    [0.1779637156, -0.9023437500, -0.3925616802],
    [0.6948834147, 0.0117187500, 0.7190269194],
    [-0.3494577308, 0.9257812500, 0.1442510712],
    [-0.9684626794, -0.1601562500, -0.1908664828],
    [0.3553206664, 0.7539062500, -0.5526052753],
    [0.8638471336, -0.3320312500, -0.3788447950],
    [0.0296344053, 0.5820312500, 0.8126262524],
    [-0.4511929212, -0.5039062500, 0.7365483277],
    [-0.5478176447, 0.4101562500, -0.7291554558],
    [-0.0429249529, -0.6757812500, -0.7358513101],
    [0.9223276508, 0.2382812500, 0.3041936068],
    [0.3278587881, -0.8476562500, 0.4171180850],
    [-0.9563261722, 0.0664062500, 0.2846585011],
    [0.0171944488, 0.9804687500, -0.1959218753],
    [0.6203285110, -0.1054687500, -0.7772186830],
    [0.2925249976, 0.8085937500, 0.5104951256],
    [-0.0630974405, -0.2773437500, 0.9586965930],
    [-0.6968055294, 0.6367187500, -0.3302291441],
    [-0.4609967124, -0.4492187500, -0.7653002978],
    [0.8733212981, 0.4648437500, -0.1457058623],
    [0.7153812723, -0.6210937500, 0.3201127753],
    [-0.6842751805, 0.2929687500, 0.6677849870],
    [-0.5986253982, -0.7929687500, 0.1133498749],
    [0.1871862546, 0.1210937500, -0.9748320931],
    [0.1840482216, -0.9648437500, -0.1876240661],
    [0.4055687243, -0.0507812500, 0.9126528773],
    [-0.5042921687, 0.8632812500, 0.0208540644],
    [-0.8337934019, -0.2226562500, -0.5051858640],
    [0.5754872660, 0.6914062500, -0.4367743172],
    [0.9170511487, -0.3945312500, -0.0579851995],
    [-0.2636656571, 0.5195312500, 0.8127531615],
    [-0.6454404611, -0.5664062500, 0.5124359190],
    [-0.2718732464, 0.3476562500, -0.8973405539],
    [0.1940889600, -0.7382812500, -0.6459646055],
    [0.7723946582, 0.1757812500, 0.6103338793],
    [0.1287407041, -0.9101562500, 0.3937530085],
    [-0.9981420338, 0.0039062500, -0.0608047820],
    [0.1681196635, 0.9179687500, -0.3592619557],
    [0.8419329595, -0.1679687500, -0.5127722601],
    [0.1127775847, 0.7460937500, 0.6562204908],
    [-0.3799423104, -0.3398437500, 0.8603197466],
    [-0.5746580760, 0.5742187500, -0.5831302795],
    [-0.1639567693, -0.5117187500, -0.8433635626],
    [0.8998953560, 0.4023437500, 0.1682493836],
    [0.5235191499, -0.6835937500, 0.5085541118],
    [-0.8872930155, 0.2304687500, 0.3994937545],
    [-0.5109889449, -0.8554687500, -0.0840447261],
    [0.5131325799, 0.0585937500, -0.8563070290],
    [0.1413096069, 0.9726562500, 0.1843133590],
    [0.0675343063, -0.1132812500, 0.9912650886],
    [-0.5706219297, 0.8007812500, -0.1820439591],
    [-0.5996316976, -0.2851562500, -0.7477484472],
    [0.7429708988, 0.6289062500, -0.2290658689],
    [0.8530688236, -0.4570312500, 0.2517856602],
    [-0.5480373397, 0.4570312500, 0.7005551447],
    [-0.7377970978, -0.6289062500, 0.2452190269],
    [0.0536128977, 0.2851562500, -0.9569804440],
    [0.3586698806, -0.8007812500, -0.4796929293],
    [0.5209476649, 0.1132812500, 0.8460383495],
    [-0.0079293314, -0.9726562500, 0.2321140776],
    [-0.9151496589, -0.0585937500, -0.3988331410],
    [0.3670704572, 0.8554687500, -0.3652841322],
    [0.9542792742, -0.2304687500, -0.1903555152],
    [-0.1306334442, 0.6835937500, 0.7180769375],
    [-0.6346836703, -0.4023437500, 0.6597697670],
    [-0.3565391249, 0.5117187500, -0.7816800965],
    [0.1289280136, -0.5742187500, -0.8084864838],
    [0.8090759709, 0.3398437500, 0.4794812811],
    [0.2894662746, -0.7460937500, 0.5996277113],
    [-0.9831738421, 0.1679687500, 0.0718031703],
    [-0.3455618704, -0.9179687500, -0.1947315273],
    [0.7770719117, -0.0039062500, -0.6293997023],
    [0.1239828700, 0.9101562500, 0.3952769264],
    [-0.2740630015, -0.1757812500, 0.9455106680],
    [-0.5332697906, 0.7382812500, -0.4129940996],
    [-0.3000647735, -0.3476562500, -0.8883109048],
    [0.8230510120, 0.5664062500, 0.0420831516],
    [0.6868014304, -0.5195312500, 0.5083218228],
    [-0.7800868718, 0.3945312500, 0.4856022706],
    [-0.7221567377, -0.6914062500, -0.0211434065],
    [0.3851260090, 0.2226562500, -0.8956015585],
    [0.4225649702, -0.8632812500, -0.2760150889],
    [0.2001448428, 0.0507812500, 0.9784494399],
    [-0.2588064928, 0.9648437500, -0.0457792245],
    [-0.7187201516, -0.1210937500, -0.6846733874],
    [0.5530829224, 0.7929687500, -0.2555383386],
    [0.9449151936, -0.2929687500, 0.1459609143],
    [-0.3962745828, 0.6210937500, 0.6761723218],
    [-0.7954594442, -0.4648437500, 0.3887988691],
    [-0.0694210918, 0.4492187500, -0.8907206221],
    [0.3752780762, -0.6367187500, -0.6736138352],
    [0.6083483364, 0.2773437500, 0.7436348203],
    [0.0585029618, -0.8085937500, 0.5854515786],
    [-0.9564481171, 0.1054687500, -0.2721825529],
    [-0.1278232998, -0.9804687500, -0.1494731892],
    [0.9437480509, -0.0664062500, -0.3239287367],
    [-0.0245066792, 0.8476562500, 0.5299795322],
    [-0.5739594003, -0.2382812500, 0.7834492024],
    [-0.3925847727, 0.6757812500, -0.6238564726],
    [0.0222431988, -0.4101562500, -0.9117439831],
    [0.7951577399, 0.5039062500, 0.3373464981],
    [0.4480075300, -0.5820312500, 0.6786227796],
    [-0.9231995832, 0.3320312500, 0.1935401213],
    [-0.6102572728, -0.7539062500, -0.2433339828],
    [0.6773510771, 0.1601562500, -0.7180149677],
    [0.3682358696, -0.9257812500, -0.0856237202],
    [-0.1478262301, -0.0117187500, 0.9889439198],
    [-0.3729208429, 0.9023437500, -0.2161152511],
];
